//! Checks run before any request is issued.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_POST_LEN: usize = 2000;
pub const MAX_CHAT_LEN: usize = 4000;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Trimmed `value`, or [`ValidationError::Empty`] naming `field`.
pub fn require(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::empty(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Like [`require`], with an upper bound in characters.
pub fn require_bounded(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let value = require(field, value)?;
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value)
}

/// Trimmed `value`, or `None` when blank.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn email(value: &str) -> Result<String, ValidationError> {
    let value = require("Email", value)?;
    if EMAIL_RE.is_match(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn password(value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty("Password"));
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_trims() {
        assert_eq!(require("Content", "  hi  ").unwrap(), "hi");
        assert_eq!(
            require("Content", " \n\t ").unwrap_err(),
            ValidationError::empty("Content")
        );
    }

    #[test]
    fn test_bounded() {
        assert!(require_bounded("Post", "abc", 3).is_ok());
        assert_eq!(
            require_bounded("Post", "abcd", 3).unwrap_err(),
            ValidationError::TooLong {
                field: "Post",
                max: 3
            }
        );
    }

    #[test]
    fn test_email() {
        assert!(email("sam@example.com").is_ok());
        assert_eq!(email("sam@example").unwrap_err(), ValidationError::InvalidEmail);
        assert_eq!(email("not an@email.com").unwrap_err(), ValidationError::InvalidEmail);
        assert_eq!(email("").unwrap_err(), ValidationError::empty("Email"));
    }

    #[test]
    fn test_password_length() {
        assert!(password("longenough").is_ok());
        assert_eq!(
            password("short").unwrap_err(),
            ValidationError::PasswordTooShort { min: 8 }
        );
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" note "), Some("note".to_string()));
    }
}
