//! Runtime configuration.
//!
//! Loaded from environment variables at startup; a `.env` file in the
//! working directory is honoured for local development.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `MINDWELL_API_URL` | `http://localhost:8000/api` |
//! | `MINDWELL_DATA_DIR` | `~/.mindwell` |
//! | `MINDWELL_TIMEOUT_SECS` | `30` |
//! | `RUST_LOG` | `mindwell=info` |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::StorageError;
use crate::storage::LocalStore;

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "mindwell=info";

/// A configuration loading failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    /// Explicit data directory (token, settings, log file)
    pub data_dir: Option<PathBuf>,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// `tracing-subscriber` filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// `.env` is only read outside of tests so test runs stay hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let mut config = Self::default();

        if let Ok(url) = std::env::var("MINDWELL_API_URL") {
            config = config.with_api_url(url)?;
        }

        if let Ok(dir) = std::env::var("MINDWELL_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Ok(secs) = std::env::var("MINDWELL_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ConfigError::InvalidValue(
                    "MINDWELL_TIMEOUT_SECS".to_string(),
                    format!("'{}' is not a number of seconds", secs),
                )
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue(
                    "MINDWELL_TIMEOUT_SECS".to_string(),
                    "timeout must be at least 1 second".to_string(),
                ));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Ok(filter) = std::env::var("RUST_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Override the backend base URL.
    ///
    /// Only `http://` and `https://` URLs are accepted; a trailing slash is
    /// stripped so paths can be appended verbatim.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidValue(
                "MINDWELL_API_URL".to_string(),
                format!("'{}' is not an http(s) URL", url),
            ));
        }
        self.api_url = trimmed.to_string();
        Ok(self)
    }

    /// Override the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Local store for token, settings and log file.
    pub fn local_store(&self) -> Result<LocalStore, StorageError> {
        match &self.data_dir {
            Some(dir) => Ok(LocalStore::new(dir.clone())),
            None => LocalStore::default_location(),
        }
    }
}
