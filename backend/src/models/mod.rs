//! Data models shared across database access and API handlers.

use serde::Serialize;
use utoipa::ToSchema;

pub mod task;
pub mod user;

/// Body for endpoints that only confirm an action.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
