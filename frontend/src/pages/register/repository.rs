use std::rc::Rc;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, AuthResponse, RegisterRequest};

#[derive(Clone)]
pub struct RegisterRepository {
    client: Rc<ApiClient>,
}

impl RegisterRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.client.register(request).await
    }
}
