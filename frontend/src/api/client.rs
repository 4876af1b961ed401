use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};

use crate::api::types::{ApiError, AuthResponse, UserResponse};
use crate::config;
use crate::utils::storage as storage_utils;

pub const TOKEN_STORAGE_KEY: &str = "tasky_token";
pub const USER_STORAGE_KEY: &str = "tasky_user";

/// Thin wrapper over `reqwest::Client` that resolves the API base URL,
/// attaches the bearer token and normalizes error bodies.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    bearer_token: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            bearer_token: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            bearer_token: None,
        }
    }

    /// Pins the token used for authenticated requests instead of reading it
    /// from localStorage. Host-side tests rely on this.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => config::await_api_base_url().await,
        }
    }

    pub(crate) fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = match &self.bearer_token {
            Some(token) => token.clone(),
            None => storage_utils::local_storage()
                .ok()
                .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
                .ok_or_else(|| ApiError::new("Authorization token not found."))?,
        };
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ApiError::new("Authorization token not found."))?;
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Expired or revoked sessions get bounced to the login page. Any 401 on
    /// an authenticated call clears the stored session first.
    pub(crate) fn handle_unauthorized_status(&self, status: StatusCode) {
        if status != StatusCode::UNAUTHORIZED {
            return;
        }
        clear_session();
        redirect_to_login_if_needed();
    }

    /// Reads the backend error envelope, falling back to `fallback` when the
    /// body is not the expected shape.
    pub(crate) async fn error_for(&self, response: Response, fallback: &str) -> ApiError {
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::new(fallback),
        }
    }
}

fn redirect_to_login_if_needed() {
    let Ok(window) = storage_utils::window() else {
        return;
    };
    let location = window.location();
    let pathname = location.pathname().unwrap_or_default();
    if pathname == "/login" {
        return;
    }
    let _ = location.set_href("/login");
}

pub(crate) fn persist_session(auth: &AuthResponse) {
    let Ok(storage) = storage_utils::local_storage() else {
        return;
    };
    let _ = storage.set_item(TOKEN_STORAGE_KEY, &auth.token);
    if let Ok(user_json) = serde_json::to_string(&auth.user) {
        let _ = storage.set_item(USER_STORAGE_KEY, &user_json);
    }
}

pub(crate) fn persist_user(user: &UserResponse) {
    let Ok(storage) = storage_utils::local_storage() else {
        return;
    };
    if let Ok(user_json) = serde_json::to_string(user) {
        let _ = storage.set_item(USER_STORAGE_KEY, &user_json);
    }
}

pub fn clear_session() {
    let Ok(storage) = storage_utils::local_storage() else {
        return;
    };
    let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    let _ = storage.remove_item(USER_STORAGE_KEY);
}

/// Pulls the `exp` claim out of a JWT without verifying the signature. The
/// backend remains the authority; this only decides whether a stored session
/// is worth restoring.
fn decode_exp(token: &str) -> Option<f64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_f64()
}

pub(crate) fn token_is_active(token: &str, now_secs: f64) -> bool {
    match decode_exp(token) {
        Some(exp) => exp > now_secs,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &[u8]) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn unexpired_token_is_active() {
        let token = token_with_payload(br#"{"sub":"u1","exp":9999999999}"#);
        assert!(token_is_active(&token, 1_700_000_000.0));
    }

    #[test]
    fn expired_token_is_not_active() {
        let token = token_with_payload(br#"{"sub":"u1","exp":1000}"#);
        assert!(!token_is_active(&token, 1_700_000_000.0));
    }

    #[test]
    fn malformed_token_is_not_active() {
        assert!(!token_is_active("not-a-jwt", 0.0));
        assert!(!token_is_active("a.b.c", 0.0));
        let no_exp = token_with_payload(br#"{"sub":"u1"}"#);
        assert!(!token_is_active(&no_exp, 0.0));
    }

    #[test]
    fn bearer_token_override_builds_auth_header() {
        let client = ApiClient::new_with_base_url("http://localhost:3000/api")
            .with_bearer_token("test-token");
        let headers = client.get_auth_headers().expect("headers");
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer test-token")
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_token_reports_the_middleware_message() {
        let client = ApiClient::new_with_base_url("http://localhost:3000/api");
        let error = client.get_auth_headers().expect_err("no token on host");
        assert_eq!(error.message, "Authorization token not found.");
    }
}
