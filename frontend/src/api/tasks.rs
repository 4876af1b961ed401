use crate::api::client::ApiClient;
use crate::api::types::{
    ApiError, CreateTaskRequest, MessageResponse, TaskMessageResponse, TaskResponse,
    TaskStatusFilter, UpdateTaskRequest,
};

impl ApiClient {
    pub async fn list_tasks(
        &self,
        status: TaskStatusFilter,
    ) -> Result<Vec<TaskResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.get_auth_headers()?;
        let response = self
            .http()
            .get(format!("{base_url}/tasks"))
            .query(&[("status", status.query_value())])
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        self.handle_unauthorized_status(response.status());
        if response.status().is_success() {
            response
                .json::<Vec<TaskResponse>>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))
        } else {
            Err(self
                .error_for(response, "Failed to load tasks. Please try again.")
                .await)
        }
    }

    pub async fn get_task(&self, task_id: &str) -> Result<TaskResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.get_auth_headers()?;
        let response = self
            .http()
            .get(format!("{base_url}/tasks/{task_id}"))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        self.handle_unauthorized_status(response.status());
        if response.status().is_success() {
            response
                .json::<TaskResponse>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))
        } else {
            Err(self
                .error_for(response, "Failed to load tasks. Please try again.")
                .await)
        }
    }

    pub async fn create_task(
        &self,
        request: &CreateTaskRequest,
    ) -> Result<TaskMessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.get_auth_headers()?;
        let response = self
            .http()
            .post(format!("{base_url}/tasks"))
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        self.handle_unauthorized_status(response.status());
        if response.status().is_success() {
            response
                .json::<TaskMessageResponse>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))
        } else {
            Err(self
                .error_for(response, "Failed to create task. Please try again.")
                .await)
        }
    }

    pub async fn update_task(
        &self,
        task_id: &str,
        request: &UpdateTaskRequest,
    ) -> Result<TaskMessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.get_auth_headers()?;
        let response = self
            .http()
            .patch(format!("{base_url}/tasks/{task_id}"))
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        self.handle_unauthorized_status(response.status());
        if response.status().is_success() {
            response
                .json::<TaskMessageResponse>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))
        } else {
            Err(self
                .error_for(response, "Failed to update task. Please try again.")
                .await)
        }
    }

    pub async fn complete_task(&self, task_id: &str) -> Result<MessageResponse, ApiError> {
        self.task_status_patch(task_id, "complete", "Failed to update task status.")
            .await
    }

    pub async fn incomplete_task(&self, task_id: &str) -> Result<MessageResponse, ApiError> {
        self.task_status_patch(task_id, "incomplete", "Failed to update task status.")
            .await
    }

    pub async fn restore_task(&self, task_id: &str) -> Result<MessageResponse, ApiError> {
        self.task_status_patch(task_id, "restore", "Failed to restore task.")
            .await
    }

    /// Soft delete. The task moves to the trash and can still be restored.
    pub async fn delete_task(&self, task_id: &str) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.get_auth_headers()?;
        let response = self
            .http()
            .delete(format!("{base_url}/tasks/{task_id}"))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        self.handle_unauthorized_status(response.status());
        if response.status().is_success() {
            response
                .json::<MessageResponse>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))
        } else {
            Err(self
                .error_for(response, "Failed to move task to trash.")
                .await)
        }
    }

    pub async fn hard_delete_task(&self, task_id: &str) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.get_auth_headers()?;
        let response = self
            .http()
            .delete(format!("{base_url}/tasks/hard-delete/{task_id}"))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        self.handle_unauthorized_status(response.status());
        if response.status().is_success() {
            response
                .json::<MessageResponse>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))
        } else {
            Err(self
                .error_for(response, "Failed to permanently delete task.")
                .await)
        }
    }

    async fn task_status_patch(
        &self,
        task_id: &str,
        segment: &str,
        fallback: &str,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.get_auth_headers()?;
        let response = self
            .http()
            .patch(format!("{base_url}/tasks/{segment}/{task_id}"))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        self.handle_unauthorized_status(response.status());
        if response.status().is_success() {
            response
                .json::<MessageResponse>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))
        } else {
            Err(self.error_for(response, fallback).await)
        }
    }
}
