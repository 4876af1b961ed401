use std::rc::Rc;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, AuthResponse, LoginRequest};

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client.login(request).await
    }
}
