//! Bearer token storage abstraction.
//!
//! The API client reads the token before every request, so reads are
//! synchronous and infallible: a token that cannot be read is treated as
//! absent.

use crate::error::StorageError;

/// Trait for bearer token storage and retrieval.
///
/// Implementations include the file-backed [`crate::adapters::FileTokenStore`]
/// and the in-memory [`crate::adapters::mock::InMemoryTokenStore`] for tests.
pub trait TokenStore: Send + Sync {
    /// Current token, if one is stored.
    fn token(&self) -> Option<String>;

    /// Store a token, replacing any previous one.
    fn set_token(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the stored token. Succeeds when nothing was stored.
    fn clear(&self) -> Result<(), StorageError>;

    /// Whether a token is currently stored.
    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}
