//! Tracing setup for the binary.
//!
//! The terminal belongs to the TUI, so events go to `mindwell.log` in the
//! data directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::StorageError;

pub const LOG_FILE: &str = "mindwell.log";

/// Open (appending) the log file inside `dir`, creating the directory.
pub fn open_log_file(dir: &Path) -> Result<(File, PathBuf), StorageError> {
    fs::create_dir_all(dir).map_err(|source| StorageError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
    Ok((file, path))
}

/// Install the global subscriber writing to `<dir>/mindwell.log`.
///
/// `filter` is an `EnvFilter` directive such as `mindwell=debug`; an
/// unparsable directive falls back to `mindwell=info`.
pub fn init(dir: &Path, filter: &str) -> Result<PathBuf, StorageError> {
    let (file, path) = open_log_file(dir)?;
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    // A subscriber may already be installed (tests); keep the first one
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        let (_file, path) = open_log_file(&nested).unwrap();
        assert!(path.exists());
        assert_eq!(path.file_name().unwrap(), LOG_FILE);
    }
}
