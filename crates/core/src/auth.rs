//! Credential checks for the demo login screen.
//!
//! Authentication itself is mocked: these checks run before any data-access
//! call and are the only gate between the form and the user upsert.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Loose email shape: something, `@`, something, `.`, something.
pub const EMAIL_PATTERN: &str = r".+@.+\..+";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Minimum password length that earns a strength point.
pub const MIN_STRONG_PASSWORD_LENGTH: usize = 8;

/// Minimum score (0..=4) a password needs for signup.
pub const MIN_SIGNUP_PASSWORD_SCORE: u8 = 2;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

pub const WEAK_PASSWORD_MESSAGE: &str =
    "For signup, please use a stronger password (8+ chars, mix cases/numbers).";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Whether the form is signing an existing user in or creating an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMode {
    #[default]
    Signin,
    Signup,
}

/// Password strength summary for the signup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: &'static str,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Score a password from 0 to 4.
///
/// One point each for: at least 8 characters, an ASCII uppercase letter,
/// an ASCII digit, a character outside `[A-Za-z0-9]`.
pub fn password_score(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= MIN_STRONG_PASSWORD_LENGTH,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|&&passed| passed).count() as u8
}

/// Human label shown next to the strength meter.
pub fn password_strength(password: &str) -> PasswordStrength {
    let score = password_score(password);
    let label = if password.is_empty() {
        "Enter a password"
    } else {
        match score {
            0 | 1 => "Weak",
            2 => "Okay",
            3 => "Good",
            _ => "Strong",
        }
    };
    PasswordStrength { score, label }
}

/// Validate login form input.
///
/// Email shape is always checked; password strength only for signup.
pub fn validate_credentials(
    mode: LoginMode,
    email: &str,
    password: &str,
) -> Result<(), CoreError> {
    if !is_valid_email(email) {
        return Err(CoreError::Validation(INVALID_EMAIL_MESSAGE.to_string()));
    }
    if mode == LoginMode::Signup && password_score(password) < MIN_SIGNUP_PASSWORD_SCORE {
        return Err(CoreError::Validation(WEAK_PASSWORD_MESSAGE.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
