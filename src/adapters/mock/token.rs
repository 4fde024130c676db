//! In-memory token store for testing.
//!
//! Keeps the bearer token in memory so tests can verify login/logout
//! without touching the file system.

use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::traits::TokenStore;

/// In-memory token store for testing.
///
/// # Example
///
/// ```ignore
/// let store = InMemoryTokenStore::new();
/// assert!(store.token().is_none());
///
/// store.set_token("abc")?;
/// assert_eq!(store.token().as_deref(), Some("abc"));
///
/// store.clear()?;
/// assert!(!store.has_token());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    /// Stored token
    token: Arc<Mutex<Option<String>>>,
    /// Whether writes should fail
    writes_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        *store.token.lock().unwrap() = Some(token.to_string());
        store
    }

    /// Make subsequent `set_token`/`clear` calls fail.
    pub fn set_writes_should_fail(&self, fail: bool) {
        *self.writes_should_fail.lock().unwrap() = fail;
    }

    fn write_error(&self) -> Option<StorageError> {
        if *self.writes_should_fail.lock().unwrap() {
            Some(StorageError::Io {
                path: "memory".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        } else {
            None
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set_token(&self, token: &str) -> Result<(), StorageError> {
        if let Some(err) = self.write_error() {
            return Err(err);
        }
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        if let Some(err) = self.write_error() {
            return Err(err);
        }
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
