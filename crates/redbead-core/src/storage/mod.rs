mod config;
pub mod database;
pub mod repository;

pub use config::Config;
pub use database::Database;
pub use repository::{WorkerRepository, EXPERIMENT_DATA_KEY};

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::StorageError;

/// A durable (or not) string key-value store.
///
/// The experiment state is written as a single JSON document under one key,
/// so this is all the persistence layer needs from a backend.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile key-value store backed by a `HashMap`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Returns `~/.config/redbead[-dev]/` based on REDBEAD_ENV.
///
/// Set REDBEAD_ENV=dev to use the development data directory, or
/// REDBEAD_DATA_DIR to point at an explicit directory.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("REDBEAD_DATA_DIR") {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("REDBEAD_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("redbead-dev")
            } else {
                base_dir.join("redbead")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
