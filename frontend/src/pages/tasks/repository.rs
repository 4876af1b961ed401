use std::rc::Rc;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, MessageResponse, TaskResponse, TaskStatusFilter};

#[derive(Clone)]
pub struct TasksRepository {
    client: Rc<ApiClient>,
}

impl TasksRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, status: TaskStatusFilter) -> Result<Vec<TaskResponse>, ApiError> {
        self.client.list_tasks(status).await
    }

    pub async fn complete(&self, task_id: &str) -> Result<MessageResponse, ApiError> {
        self.client.complete_task(task_id).await
    }

    pub async fn mark_incomplete(&self, task_id: &str) -> Result<MessageResponse, ApiError> {
        self.client.incomplete_task(task_id).await
    }

    pub async fn move_to_trash(&self, task_id: &str) -> Result<MessageResponse, ApiError> {
        self.client.delete_task(task_id).await
    }

    pub async fn restore(&self, task_id: &str) -> Result<MessageResponse, ApiError> {
        self.client.restore_task(task_id).await
    }

    pub async fn delete_forever(&self, task_id: &str) -> Result<MessageResponse, ApiError> {
        self.client.hard_delete_task(task_id).await
    }
}
