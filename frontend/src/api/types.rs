use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error envelope shared by every endpoint. The backend replies with
/// `{"message": "..."}` on failure; anything unparseable falls back to a
/// per-action message supplied by the caller.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_or_username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMessageResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub is_deleted: bool,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMessageResponse {
    pub message: String,
    pub task: TaskResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Which slice of the task list a view asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatusFilter {
    Active,
    Completed,
    Trash,
}

impl TaskStatusFilter {
    /// Value sent as the `status` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            TaskStatusFilter::Active => "active",
            TaskStatusFilter::Completed => "completed",
            TaskStatusFilter::Trash => "trash",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_uses_camel_case_keys() {
        let request = LoginRequest {
            email_or_username: "ada".into(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert!(json.get("emailOrUsername").is_some());
        assert!(json.get("email_or_username").is_none());
    }

    #[test]
    fn register_request_uses_camel_case_keys() {
        let request = RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert!(json.get("firstName").is_some());
        assert!(json.get("lastName").is_some());
    }

    #[test]
    fn task_response_parses_backend_shape() {
        let task: TaskResponse = serde_json::from_str(
            r#"{
                "id": "0198c0de-0000-7000-8000-000000000001",
                "title": "Write report",
                "description": null,
                "isCompleted": false,
                "isDeleted": false,
                "dateCreated": "2026-08-01T09:00:00Z",
                "dateUpdated": "2026-08-01T09:00:00Z"
            }"#,
        )
        .expect("parse task");
        assert_eq!(task.title, "Write report");
        assert!(!task.is_completed);
        assert!(task.description.is_none());
    }

    #[test]
    fn update_task_request_omits_unset_fields() {
        let request = UpdateTaskRequest {
            title: Some("New title".into()),
            description: None,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert!(json.get("title").is_some());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn status_filter_maps_to_query_values() {
        assert_eq!(TaskStatusFilter::Active.query_value(), "active");
        assert_eq!(TaskStatusFilter::Completed.query_value(), "completed");
        assert_eq!(TaskStatusFilter::Trash.query_value(), "trash");
    }

    #[test]
    fn api_error_displays_its_message() {
        let error = ApiError::new("Invalid credentials.");
        assert_eq!(error.to_string(), "Invalid credentials.");
        let as_string: String = error.into();
        assert_eq!(as_string, "Invalid credentials.");
    }
}
