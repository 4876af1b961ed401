//! JWT issuance and verification for the session tokens handed out on
//! login and registration.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user's id.
    pub sub: String,
    /// Expiration time as a unix timestamp.
    pub exp: i64,
    /// Issued-at time as a unix timestamp.
    pub iat: i64,
    /// Unique token id.
    pub jti: String,
}

impl Claims {
    pub fn new(user_id: UserId, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parses the subject back into a typed user id.
    pub fn user_id(&self) -> anyhow::Result<UserId> {
        self.sub
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid subject claim: {}", e))
    }
}

pub fn create_token(user_id: UserId, secret: &str, expiration_hours: u64) -> anyhow::Result<String> {
    let claims = Claims::new(user_id, expiration_hours);
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok(token)
}

/// Decodes and validates a token. Expiry is checked by the default
/// validation, so an expired token fails here rather than downstream.
pub fn verify_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_verify_roundtrip() {
        let user_id = UserId::new();
        let token = create_token(user_id, "secret", 1).expect("create token");
        let claims = verify_token(&token, "secret").expect("verify token");
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token(UserId::new(), "secret", 1).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut claims = Claims::new(UserId::new(), 1);
        claims.exp = (Utc::now() - Duration::hours(2)).timestamp();
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("secret".as_ref()),
        )
        .unwrap();
        assert!(verify_token(&token, "secret").is_err());
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token = create_token(UserId::new(), "secret", 1).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(verify_token(&tampered, "secret").is_err());
    }
}
