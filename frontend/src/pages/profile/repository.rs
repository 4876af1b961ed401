use std::rc::Rc;

use crate::api::client::ApiClient;
use crate::api::types::{
    ApiError, ChangePasswordRequest, MessageResponse, UpdateProfileRequest, UserMessageResponse,
    UserResponse,
};

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl ProfileRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(&self) -> Result<UserResponse, ApiError> {
        self.client.get_profile().await
    }

    pub async fn update(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<UserMessageResponse, ApiError> {
        self.client.update_profile(request).await
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.change_password(request).await
    }

    pub async fn upload_avatar(
        &self,
        file_name: String,
        mime_type: String,
        bytes: Vec<u8>,
    ) -> Result<UserMessageResponse, ApiError> {
        self.client.upload_avatar(file_name, mime_type, bytes).await
    }
}
