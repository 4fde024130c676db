//! Error handling for mindwell.
//!
//! | Type | Source | Surfaced as |
//! |------|--------|-------------|
//! | [`ApiError`] | API client (network, status, decode) | generic toast |
//! | [`ValidationError`] | local checks before any request | immediate toast |
//! | [`StorageError`] | token / settings persistence | generic toast |
//!
//! [`MindwellError`] unifies them for the screen layer. None of them is
//! fatal: every failure can be recovered by retrying the user action, and
//! nothing in the crate retries automatically.

mod api;
mod storage;
mod validation;

pub use api::ApiError;
pub use storage::StorageError;
pub use validation::ValidationError;

/// Result of a single API call.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result of a user-level action.
pub type MindwellResult<T> = Result<T, MindwellError>;

/// Any failure a screen action can report.
#[derive(Debug, thiserror::Error)]
pub enum MindwellError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl MindwellError {
    /// Text for the toast shown at the call site.
    pub fn user_message(&self) -> String {
        match self {
            MindwellError::Api(e) => e.user_message(),
            MindwellError::Validation(e) => e.to_string(),
            MindwellError::Storage(e) => e.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            MindwellError::Api(e) => e.error_code(),
            MindwellError::Validation(_) => "E_VALIDATION",
            MindwellError::Storage(e) => e.error_code(),
        }
    }

    /// Whether the failure was caught before any request was issued.
    pub fn is_validation(&self) -> bool {
        matches!(self, MindwellError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::HttpError;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err: MindwellError = ValidationError::MissingMood.into();
        assert!(err.is_validation());
        assert_eq!(err.user_message(), "Please select how you're feeling");
        assert_eq!(err.error_code(), "E_VALIDATION");
    }

    #[test]
    fn test_api_error_passes_through() {
        let api = ApiError::Network(HttpError::ConnectionFailed("refused".to_string()));
        let err: MindwellError = api.clone().into();
        assert!(!err.is_validation());
        assert_eq!(err.user_message(), api.user_message());
        assert!(matches!(err, MindwellError::Api(inner) if inner == api));
    }

    #[test]
    fn test_storage_error_conversion() {
        let err: MindwellError = StorageError::NoDataDirectory.into();
        assert_eq!(err.error_code(), "E_STORE_NODIR");
    }
}
