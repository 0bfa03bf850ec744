//! Core error types for dailytip-core.
//!
//! Most failures in this crate are recovered locally: unreadable store
//! payloads become cache misses and notification problems become advisory
//! messages. The types below cover what is left, plus the advisory payloads
//! themselves.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dailytip-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog construction or access errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Key-value store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tip catalog errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Catalog accessed out of bounds. Indicates a logic bug in the caller.
    #[error("Index {index} out of bounds for tip catalog (length: {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A tip with a blank text or category
    #[error("Tip #{index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    /// Catalog file could not be read or parsed
    #[error("Failed to load tip catalog from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },
}

/// Key-value store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Store migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Store is locked")]
    Locked,

    /// Data directory could not be created
    #[error("Store IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Data directory could not be determined or created
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Notification problems that are surfaced to the user as advisories.
///
/// None of these abort anything; the gateway hands them to an
/// [`AdvisorySink`](crate::notify::AdvisorySink) and reports a
/// [`NotifyOutcome`](crate::notify::NotifyOutcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The environment has no notification capability
    #[error("Notifications are not supported in this environment.")]
    CapabilityUnavailable,

    /// The user blocked notifications
    #[error("Notifications were blocked. You can change this with `dailytip notifications allow`.")]
    PermissionDenied,

    /// Permission is undecided and nobody can be asked right now
    #[error("Notifications need your permission first. Run `dailytip notifications allow` or `dailytip notify` in a terminal.")]
    PromptUnavailable,

    /// The dispatch boundary rejected the notification
    #[error("Failed to show notification: {0}")]
    DispatchFailed(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, _msg) => {
                if code.code == rusqlite::ErrorCode::DatabaseLocked
                    || code.code == rusqlite::ErrorCode::DatabaseBusy
                {
                    StoreError::Locked
                } else {
                    StoreError::QueryFailed(err.to_string())
                }
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
