#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

use crate::api::types::UserResponse;

pub fn sample_user() -> UserResponse {
    UserResponse {
        id: "0198c0de-0000-7000-8000-00000000000a".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        username: "ada".into(),
        email: "ada@example.com".into(),
        avatar: None,
    }
}
