use crate::api::client::{persist_user, ApiClient};
use crate::api::types::{ApiError, UpdateProfileRequest, UserMessageResponse, UserResponse};

impl ApiClient {
    pub async fn get_profile(&self) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.get_auth_headers()?;
        let response = self
            .http()
            .get(format!("{base_url}/user"))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        self.handle_unauthorized_status(response.status());
        if response.status().is_success() {
            response
                .json::<UserResponse>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))
        } else {
            Err(self.error_for(response, "Failed to load profile.").await)
        }
    }

    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<UserMessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.get_auth_headers()?;
        let response = self
            .http()
            .patch(format!("{base_url}/user"))
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        self.handle_unauthorized_status(response.status());
        if response.status().is_success() {
            let updated = response
                .json::<UserMessageResponse>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))?;
            persist_user(&updated.user);
            Ok(updated)
        } else {
            Err(self.error_for(response, "Failed to update profile.").await)
        }
    }
}
