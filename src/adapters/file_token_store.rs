//! File-backed token store adapter.
//!
//! Keeps the bearer token under [`TOKEN_KEY`] in a [`LocalStore`].

use crate::error::StorageError;
use crate::storage::{LocalStore, TOKEN_KEY};
use crate::traits::TokenStore;

/// Token store persisting to the local data directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    store: LocalStore,
}

impl FileTokenStore {
    /// Wrap an existing local store.
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Path of the token file.
    pub fn token_path(&self) -> std::path::PathBuf {
        self.store.path_for(TOKEN_KEY)
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        match self.store.get::<String>(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Ignoring unreadable token file: {}", e);
                None
            }
        }
    }

    fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(TOKEN_KEY, &token.to_string())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(TOKEN_KEY)
    }
}
