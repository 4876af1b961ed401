use std::rc::Rc;

use crate::api::client::ApiClient;
use crate::api::types::{
    ApiError, CreateTaskRequest, TaskMessageResponse, TaskResponse, UpdateTaskRequest,
};

#[derive(Clone)]
pub struct NewTaskRepository {
    client: Rc<ApiClient>,
}

impl NewTaskRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(&self, task_id: &str) -> Result<TaskResponse, ApiError> {
        self.client.get_task(task_id).await
    }

    pub async fn create(
        &self,
        request: &CreateTaskRequest,
    ) -> Result<TaskMessageResponse, ApiError> {
        self.client.create_task(request).await
    }

    pub async fn update(
        &self,
        task_id: &str,
        request: &UpdateTaskRequest,
    ) -> Result<TaskMessageResponse, ApiError> {
        self.client.update_task(task_id, request).await
    }
}
