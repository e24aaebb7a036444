//! Core error types for daylog-core.
//!
//! This module defines the error hierarchy using thiserror. Recoverable
//! conditions (malformed keys, corrupt payloads) get their own variants so
//! callers can degrade instead of aborting a whole render.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for daylog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Date key errors
    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    /// Entry store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Date key errors.
#[derive(Error, Debug)]
pub enum KeyError {
    /// Key string does not match the fixed YYYY-MM-DD format
    #[error("Malformed date key {input:?}: expected YYYY-MM-DD")]
    Malformed { input: String },
}

/// Entry store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the underlying storage medium
    #[error("Failed to open entry store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The storage medium cannot be written or read
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Stored payload cannot be decoded as a valid entry.
    /// Recoverable: callers treat the day as unreadable, not as a crash.
    #[error("Stored entry for {key} cannot be decoded")]
    CorruptEntry { key: String },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::StorageUnavailable(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_errors_convert_into_core_error() {
        let key_err = KeyError::Malformed {
            input: "nope".to_string(),
        };
        let core: CoreError = key_err.into();
        assert!(core.to_string().contains("nope"));

        let store_err = StoreError::CorruptEntry {
            key: "2024-01-05".to_string(),
        };
        let core: CoreError = store_err.into();
        assert!(core.to_string().contains("2024-01-05"));
    }

    #[test]
    fn rusqlite_errors_map_to_storage_unavailable() {
        let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, StoreError::StorageUnavailable(_)));
    }
}
