//! Error types for the persistence and codec layers.

use thiserror::Error;

/// Failure of the underlying key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize storage contents: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failure while reading or writing a typed record through a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A value exists under `key` but cannot be turned back into its record.
    #[error("persisted value under '{key}' is corrupt: {reason}")]
    CorruptPersistedState { key: String, reason: String },
    #[error("failed to serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failure turning a stored app-data string into its typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("'{value}' is not a valid timestamp for '{key}'")]
    InvalidTimestamp { key: String, value: String },
    #[error("expected a string for '{key}', found {value}")]
    NotAString { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("host must not be empty")]
    EmptyHost,
    #[error("port must be between 1 and 65535")]
    InvalidPort,
    #[error("'{0}' is not a valid port")]
    UnparsablePort(String),
}
