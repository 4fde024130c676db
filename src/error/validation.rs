//! Client-side validation failures.
//!
//! These are detected before any network call and shown immediately.

/// Input rejected locally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A mood check-in was submitted without choosing a level.
    #[error("Please select how you're feeling")]
    MissingMood,

    /// A mood level outside 1..=5.
    #[error("Mood level must be between 1 and 5, got {0}")]
    MoodOutOfRange(u8),

    /// A required text field is blank.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The email address is not plausibly an email.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// The password is too short.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    /// Text exceeds the accepted length.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    /// Shortcut for [`ValidationError::Empty`].
    pub fn empty(field: &'static str) -> Self {
        ValidationError::Empty { field }
    }
}
