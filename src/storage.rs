//! Directory-backed key-value store.
//!
//! Stands in for browser local storage: each key is one JSON file under the
//! data directory (`~/.mindwell` unless overridden). The bearer token and
//! the settings blob are the only keys written.

use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Default data directory name under the home directory.
pub const DATA_DIR: &str = ".mindwell";

/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "authToken";

/// Key holding the serialized settings blob.
pub const SETTINGS_KEY: &str = "mindmate-settings";

/// Key-value persistence rooted at a directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at `~/.mindwell`.
    pub fn default_location() -> Result<Self, StorageError> {
        let home = dirs::home_dir().ok_or(StorageError::NoDataDirectory)?;
        Ok(Self::new(home.join(DATA_DIR)))
    }

    /// Directory holding the key files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Read the value under `key`. A missing key is `Ok(None)`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(&path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map(Some)
            .map_err(|source| StorageError::Serialization {
                key: key.to_string(),
                source,
            })
    }

    /// Write `value` under `key`, replacing any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
                path: self.root.clone(),
                source,
            })?;
        }

        let path = self.path_for(key);
        let io_err = |source| StorageError::Io {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value).map_err(|source| {
            StorageError::Serialization {
                key: key.to_string(),
                source,
            }
        })?;
        writer.flush().map_err(io_err)
    }

    /// Delete `key`. Succeeds when the key did not exist.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path).map_err(|source| StorageError::Io { path, source })
    }
}
