use std::rc::Rc;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, MessageResponse, ResetPasswordRequest};

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn reset(&self, request: &ResetPasswordRequest) -> Result<MessageResponse, ApiError> {
        self.client.reset_password(request).await
    }
}
