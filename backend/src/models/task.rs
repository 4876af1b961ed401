//! Models for tasks and their state transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::types::{TaskId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of a task.
///
/// A task is observable in exactly one of three states: active
/// (`!is_completed && !is_deleted`), completed (`is_completed &&
/// !is_deleted`) or trashed (`is_deleted`, completion preserved).
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    /// Soft-delete flag. Hard deletion requires this to be set first.
    pub is_deleted: bool,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
    /// Owner reference. Never changes after creation.
    pub owner_id: UserId,
}

impl Task {
    pub fn new(title: String, description: Option<String>, owner_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title,
            description,
            is_completed: false,
            is_deleted: false,
            date_created: now,
            date_updated: now,
            owner_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// API representation of a task. The owner reference stays server-side.
pub struct TaskResponse {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub is_deleted: bool,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        TaskResponse {
            id: task.id,
            title: task.title,
            description: task.description,
            is_completed: task.is_completed,
            is_deleted: task.is_deleted,
            date_created: task.date_created,
            date_updated: task.date_updated,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Confirmation message plus the task after the mutation.
pub struct TaskMessageResponse {
    pub message: String,
    pub task: TaskResponse,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload for creating a task. Title is required, description optional.
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload for updating a task. Serde field presence is the "provided"
/// marker: an omitted field is left untouched, a provided description may
/// be empty.
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Status filter for the task list. Unknown or absent values fall back to
/// `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
pub enum TaskStatusFilter {
    #[default]
    Active,
    Completed,
    Trash,
}

impl TaskStatusFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("completed") => TaskStatusFilter::Completed,
            Some("trash") => TaskStatusFilter::Trash,
            _ => TaskStatusFilter::Active,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
/// Query parameters accepted by the task list endpoint.
pub struct TaskListQuery {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_defaults_to_active() {
        assert_eq!(TaskStatusFilter::parse(None), TaskStatusFilter::Active);
        assert_eq!(
            TaskStatusFilter::parse(Some("bogus")),
            TaskStatusFilter::Active
        );
        assert_eq!(
            TaskStatusFilter::parse(Some("completed")),
            TaskStatusFilter::Completed
        );
        assert_eq!(TaskStatusFilter::parse(Some("trash")), TaskStatusFilter::Trash);
    }

    #[test]
    fn new_task_starts_active() {
        let task = Task::new("Buy milk".into(), None, UserId::new());
        assert!(!task.is_completed);
        assert!(!task.is_deleted);
    }

    #[test]
    fn task_response_emits_camel_case() {
        let task = Task::new("Buy milk".into(), Some("2L".into()), UserId::new());
        let json = serde_json::to_value(TaskResponse::from(task)).unwrap();
        assert_eq!(json["isCompleted"], false);
        assert_eq!(json["isDeleted"], false);
        assert!(json.get("dateCreated").is_some());
        assert!(json.get("ownerId").is_none());
    }

    #[test]
    fn update_request_distinguishes_omitted_from_empty() {
        let omitted: UpdateTaskRequest = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert!(omitted.description.is_none());

        let cleared: UpdateTaskRequest =
            serde_json::from_str(r#"{"description":""}"#).unwrap();
        assert_eq!(cleared.description.as_deref(), Some(""));
    }
}
