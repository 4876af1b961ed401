use crate::api::client::{persist_session, persist_user, ApiClient};
use crate::api::types::{
    ApiError, AuthResponse, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest,
    MessageResponse, RegisterRequest, ResetPasswordRequest, UserMessageResponse,
};

impl ApiClient {
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .post(format!("{base_url}/auth/register"))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        if response.status().is_success() {
            let auth = response
                .json::<AuthResponse>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))?;
            persist_session(&auth);
            Ok(auth)
        } else {
            Err(self
                .error_for(response, "Registration failed. Please try again.")
                .await)
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .post(format!("{base_url}/auth/login"))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        if response.status().is_success() {
            let auth = response
                .json::<AuthResponse>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))?;
            persist_session(&auth);
            Ok(auth)
        } else {
            Err(self
                .error_for(response, "Login failed. Please try again.")
                .await)
        }
    }

    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .post(format!("{base_url}/auth/forgot-password"))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        if response.status().is_success() {
            response
                .json::<MessageResponse>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))
        } else {
            Err(self
                .error_for(response, "Failed to send reset link. Please try again.")
                .await)
        }
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .post(format!("{base_url}/auth/reset-password"))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;

        if response.status().is_success() {
            response
                .json::<MessageResponse>()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {e}")))
        } else {
            Err(self
                .error_for(response, "Failed to reset password. Please try again.")
                .await)
        }
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.get_auth_headers()?;
        let response = self
            .http()
            .patch(format!("{base_url}/auth/password"))
            .headers(headers)
            .json(request)
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
            Err(self.error_for(response, "Failed to change password.").await)
        }
    }

    pub async fn upload_avatar(
        &self,
        file_name: String,
        mime_type: String,
        bytes: Vec<u8>,
    ) -> Result<UserMessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.get_auth_headers()?;
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&mime_type)
            .map_err(|e| ApiError::new(format!("Request failed: {e}")))?;
        let form = reqwest::multipart::Form::new().part("avatar", part);
        let response = self
            .http()
            .patch(format!("{base_url}/auth/avatar"))
            .headers(headers)
            .multipart(form)
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
            Err(self.error_for(response, "Failed to upload avatar.").await)
        }
    }
}
