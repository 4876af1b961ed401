//! Common validation rules shared across request payloads.

use validator::ValidationError;

/// Minimum acceptable password-strength score (0..=4 scale).
pub const MIN_PASSWORD_STRENGTH_SCORE: u8 = 2;

/// Validates username format.
///
/// Requirements:
/// - Only alphanumeric characters and underscores
/// - 1-50 characters in length
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() || username.len() > 50 {
        return Err(ValidationError::new("username_invalid_length"));
    }

    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("username_invalid_characters"));
    }

    Ok(())
}

/// Validates a plausible email shape: one `@`, non-empty local part and a
/// domain containing a dot.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::new("email_invalid"));
    };
    if local.is_empty() || domain.len() < 3 || !domain.contains('.') {
        return Err(ValidationError::new("email_invalid"));
    }
    Ok(())
}

/// Outcome of scoring a candidate password.
#[derive(Debug, Clone)]
pub struct PasswordStrength {
    /// Score on a 0..=4 scale.
    pub score: u8,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

impl PasswordStrength {
    pub fn is_acceptable(&self) -> bool {
        self.score >= MIN_PASSWORD_STRENGTH_SCORE
    }

    /// Human-readable rejection message embedding the score and feedback.
    pub fn rejection_message(&self) -> String {
        let mut message = format!("Password is too weak. Score: {}/4.", self.score);
        if let Some(warning) = &self.warning {
            message.push_str(&format!(" Warning: {}.", warning));
        }
        if !self.suggestions.is_empty() {
            message.push_str(&format!(" Suggestions: {}.", self.suggestions.join(", ")));
        }
        message
    }
}

const COMMON_PASSWORDS: &[&str] = &[
    "password", "passw0rd", "123456", "12345678", "123456789", "qwerty", "abc123", "letmein",
    "welcome", "iloveyou", "admin", "monkey", "dragon", "football", "baseball", "sunshine",
    "princess", "trustno1",
];

/// Scores a candidate password on a 0..=4 scale.
///
/// The estimate combines length, character variety, and penalties for
/// dictionary words and low-entropy patterns (single repeated character,
/// straight keyboard runs). Registration, password change, and password
/// reset all gate on the same score.
pub fn score_password(password: &str) -> PasswordStrength {
    let lowered = password.to_lowercase();

    if COMMON_PASSWORDS
        .iter()
        .any(|common| lowered == *common || lowered.trim_end_matches(char::is_numeric) == *common)
    {
        return PasswordStrength {
            score: 0,
            warning: Some("This is a very common password".into()),
            suggestions: vec!["Add another word or two".into()],
        };
    }

    let length = password.chars().count();
    let mut score: i32 = match length {
        0..=5 => 0,
        6..=7 => 1,
        8..=10 => 2,
        11..=13 => 3,
        _ => 4,
    };

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric());
    let variety = [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|v| **v)
        .count();

    let mut warning = None;
    let mut suggestions = Vec::new();

    if variety >= 3 {
        score += 1;
    } else if variety <= 1 && length > 0 {
        score -= 1;
        suggestions.push("Use a mix of letters, numbers and symbols".to_string());
    }

    if is_single_repeat(&lowered) {
        score = score.min(1);
        warning = Some(r#"Repeats like "aaa" are easy to guess"#.to_string());
        suggestions.push("Avoid repeated characters".to_string());
    } else if is_sequential_run(&lowered) {
        score = score.min(1);
        warning = Some("Sequences of characters are easy to guess".to_string());
        suggestions.push("Avoid sequences like abcdef or 123456".to_string());
    }

    if length < 8 {
        suggestions.push("Use a longer password".to_string());
    }

    PasswordStrength {
        score: score.clamp(0, 4) as u8,
        warning,
        suggestions,
    }
}

fn is_single_repeat(password: &str) -> bool {
    let mut chars = password.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    password.len() >= 3 && chars.all(|c| c == first)
}

fn is_sequential_run(password: &str) -> bool {
    let bytes: Vec<u8> = password.bytes().collect();
    if bytes.len() < 4 {
        return false;
    }
    let ascending = bytes.windows(2).all(|w| w[1] == w[0].wrapping_add(1));
    let descending = bytes.windows(2).all(|w| w[1] == w[0].wrapping_sub(1));
    ascending || descending
}
