//! Models that represent user accounts and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::types::UserId;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of a registered user account.
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Login name, stored lowercase.
    pub username: String,
    /// Email address, stored lowercase.
    pub email: String,
    /// Argon2 hash of the user's password. Never leaves the server.
    pub password_hash: String,
    /// Public path of the uploaded avatar, if any.
    pub avatar: Option<String>,
    /// SHA-256 digest of the outstanding reset token, if any.
    pub reset_token_hash: Option<String>,
    /// Expiry of the outstanding reset token.
    pub reset_token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Constructs a new user with a freshly generated identifier.
    /// Username and email are normalized to lowercase.
    pub fn new(
        first_name: String,
        last_name: String,
        username: String,
        email: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            first_name,
            last_name,
            username: username.to_lowercase(),
            email: email.to_lowercase(),
            password_hash,
            avatar: None,
            reset_token_hash: None,
            reset_token_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Public-facing representation of a user returned by the API.
/// Excludes the password hash and reset-token fields.
pub struct UserResponse {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            email: user.email,
            avatar: user.avatar,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload for creating a new account. Fields are optional at the serde
/// level so a missing field yields the required-fields error, not a 422.
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Credentials submitted by a user attempting to authenticate.
/// The identifier matches either the email or the username.
pub struct LoginRequest {
    pub email_or_username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Token plus public user fields returned after login or registration.
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Confirmation message plus the updated public user fields.
pub struct UserMessageResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload submitted when a user changes their own password.
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload for requesting a password-reset email.
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload for completing a password reset with an emailed token.
pub struct ResetPasswordRequest {
    pub token: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload for updating the caller's profile. All four fields are required.
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_normalizes_username_and_email() {
        let user = User::new(
            "Ada".into(),
            "Lovelace".into(),
            "AdaL".into(),
            "Ada@Example.COM".into(),
            "hash".into(),
        );
        assert_eq!(user.username, "adal");
        assert_eq!(user.email, "ada@example.com");
        assert!(user.avatar.is_none());
        assert!(user.reset_token_hash.is_none());
    }

    #[test]
    fn user_response_excludes_secrets() {
        let mut user = User::new(
            "Ada".into(),
            "Lovelace".into(),
            "ada".into(),
            "ada@example.com".into(),
            "hash".into(),
        );
        user.reset_token_hash = Some("digest".into());
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(json.get("resetTokenHash").is_none());
        assert_eq!(json["firstName"], "Ada");
    }

    #[test]
    fn register_request_uses_camel_case_fields() {
        let payload: RegisterRequest = serde_json::from_str(
            r#"{"firstName":"A","lastName":"B","username":"ab","email":"a@b.c","password":"pw"}"#,
        )
        .unwrap();
        assert_eq!(payload.first_name.as_deref(), Some("A"));
        assert_eq!(payload.last_name.as_deref(), Some("B"));
    }
}
