//! Core error types for redbead-core.
//!
//! This module defines the error hierarchy using thiserror. Only the CLI host
//! and the storage layer ever see these as `Err` values; the experiment manager
//! turns persistence failures into log lines and validation failures into
//! no-op outcomes.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Core error type for redbead-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,

    /// The data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),

    /// Stored payload could not be encoded or decoded
    #[error("Failed to encode or decode stored data: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors raised at the input boundary, before any mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Worker name was empty after trimming whitespace
    #[error("Worker name must not be empty")]
    EmptyName,

    /// Bead count input was negative or not an integer
    #[error("Invalid bead count '{input}': expected a non-negative integer")]
    InvalidBeadCount { input: String },

    /// Worker id argument is not a UUID
    #[error("Invalid worker id '{input}'")]
    InvalidWorkerId { input: String },

    /// No worker with the given id exists in the collection
    #[error("Worker {0} not found")]
    UnknownWorker(Uuid),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg) => {
                if e.code == rusqlite::ErrorCode::DatabaseBusy
                    || e.code == rusqlite::ErrorCode::DatabaseLocked
                {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

impl From<String> for CoreError {
    fn from(message: String) -> Self {
        CoreError::Custom(message)
    }
}

impl From<&str> for CoreError {
    fn from(message: &str) -> Self {
        CoreError::Custom(message.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
