//! Reset-token generation and digesting.
//!
//! Only the SHA-256 digest of a reset token is persisted. The plaintext
//! token exists in the reset email alone, so a database leak does not
//! expose usable tokens.

use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of generated password-reset tokens.
pub const RESET_TOKEN_LENGTH: usize = 64;

pub fn generate_reset_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RESET_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
