//! Errors from the on-disk key-value store.

use std::path::PathBuf;

/// Local persistence failure (token or settings blob).
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Neither an explicit data dir nor a home directory is available.
    #[error("Could not determine a data directory")]
    NoDataDirectory,

    /// Reading or writing a key's file failed.
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be (de)serialized.
    #[error("Invalid data under key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StorageError::NoDataDirectory => {
                "No place to save local data was found. Set MINDWELL_DATA_DIR.".to_string()
            }
            StorageError::Io { .. } => "Couldn't save to local storage.".to_string(),
            StorageError::Serialization { .. } => "Saved data looks corrupted.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::NoDataDirectory => "E_STORE_NODIR",
            StorageError::Io { .. } => "E_STORE_IO",
            StorageError::Serialization { .. } => "E_STORE_SERDE",
        }
    }
}
