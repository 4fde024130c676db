//! Errors produced by the API client layer.
//!
//! Stores propagate these unmodified; screens turn them into a short
//! toast via [`ApiError::user_message`].

use crate::traits::HttpError;

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response.
    #[error("Network error: {0}")]
    Network(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The request body could not be encoded.
    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected our credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(HttpError::Timeout(_)) => {
                "The server took too long to respond. Please try again.".to_string()
            }
            ApiError::Network(_) => {
                "Unable to reach the server. Please check your connection.".to_string()
            }
            ApiError::Status { status, .. } => match *status {
                400 | 422 => "Some of the details were not accepted. Please check and try again."
                    .to_string(),
                401 => "Please sign in again.".to_string(),
                403 => "You don't have permission to do that.".to_string(),
                404 => "We couldn't find what you were looking for.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => "Something went wrong on our side. Please try again later.".to_string(),
                _ => format!("Something went wrong (HTTP {}). Please try again.", status),
            },
            ApiError::Decode(_) | ApiError::Encode(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Network(HttpError::Timeout(_)) => "E_API_TIMEOUT",
            ApiError::Network(_) => "E_API_NETWORK",
            ApiError::Status { .. } => "E_API_STATUS",
            ApiError::Decode(_) => "E_API_DECODE",
            ApiError::Encode(_) => "E_API_ENCODE",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessors() {
        let err = ApiError::Status {
            status: 401,
            message: "Token expired".to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());

        let err = ApiError::Network(HttpError::ConnectionFailed("refused".to_string()));
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_user_messages_are_generic() {
        let err = ApiError::Status {
            status: 500,
            message: "stack trace: NullPointer at line 42".to_string(),
        };
        assert!(!err.user_message().contains("NullPointer"));

        let err = ApiError::Decode("missing field `id`".to_string());
        assert!(!err.user_message().contains("id"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ApiError::Network(HttpError::Timeout("30s".to_string())).error_code(),
            "E_API_TIMEOUT"
        );
        assert_eq!(
            ApiError::Status {
                status: 404,
                message: String::new()
            }
            .error_code(),
            "E_API_STATUS"
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status {
            status: 422,
            message: "content is required".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (422): content is required");
    }
}
