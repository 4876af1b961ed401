use std::rc::Rc;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, ForgotPasswordRequest, MessageResponse};

#[derive(Clone)]
pub struct ForgotPasswordRepository {
    client: Rc<ApiClient>,
}

impl ForgotPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn request_reset(&self, email: String) -> Result<MessageResponse, ApiError> {
        self.client
            .forgot_password(&ForgotPasswordRequest { email })
            .await
    }
}
