//! Persistence of the worker collection.
//!
//! The whole collection is encoded as one JSON array and stored under
//! [`EXPERIMENT_DATA_KEY`]. Failures never leave this module as errors:
//! a failed save is logged and reported as `false`, a failed load is
//! logged and yields an empty collection.

use super::KeyValueStore;
use crate::error::StorageError;
use crate::worker::Worker;

/// Fixed key the worker collection is stored under.
pub const EXPERIMENT_DATA_KEY: &str = "experimentData";

/// Reads and writes the worker collection through a key-value store.
#[derive(Debug)]
pub struct WorkerRepository<S> {
    store: S,
}

impl<S: KeyValueStore> WorkerRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Encode and write the full collection. Returns whether the write succeeded.
    ///
    /// On failure the previously stored value is left as it was.
    pub fn save(&mut self, workers: &[Worker]) -> bool {
        match self.try_save(workers) {
            Ok(()) => {
                tracing::debug!(workers = workers.len(), "saved experiment data");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save experiment data");
                false
            }
        }
    }

    /// Read and decode the stored collection, falling back to empty.
    pub fn load(&self) -> Vec<Worker> {
        match self.try_load() {
            Ok(Some(workers)) => {
                tracing::debug!(workers = workers.len(), "loaded experiment data");
                workers
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, "failed to load experiment data");
                Vec::new()
            }
        }
    }

    fn try_save(&mut self, workers: &[Worker]) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(workers)?;
        self.store.set(EXPERIMENT_DATA_KEY, &encoded)
    }

    fn try_load(&self) -> Result<Option<Vec<Worker>>, StorageError> {
        let Some(raw) = self.store.get(EXPERIMENT_DATA_KEY)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Locked)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Locked)
        }
    }

    #[test]
    fn load_without_stored_data_is_empty() {
        let repo = WorkerRepository::new(MemoryStore::new());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_identity() {
        let mut repo = WorkerRepository::new(MemoryStore::new());
        let workers = vec![
            Worker::with_counts("Worker 1", vec![5, 10]),
            Worker::with_counts("Worker 2", vec![15, 20]),
        ];
        assert!(repo.save(&workers));
        assert_eq!(repo.load(), workers);
    }

    #[test]
    fn corrupt_data_loads_as_empty() {
        let mut store = MemoryStore::new();
        store.set(EXPERIMENT_DATA_KEY, "{not json").unwrap();
        let repo = WorkerRepository::new(store);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn negative_counts_in_storage_are_rejected() {
        let mut store = MemoryStore::new();
        store
            .set(
                EXPERIMENT_DATA_KEY,
                r#"[{"id":"6f1c1b9e-3d2a-4c55-9a57-0c8f3f1d2e4b","name":"A","dailyBeadCounts":[-1]}]"#,
            )
            .unwrap();
        let repo = WorkerRepository::new(store);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn store_failures_are_swallowed() {
        let mut repo = WorkerRepository::new(FailingStore);
        assert!(!repo.save(&[Worker::new("A")]));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn stored_payload_is_a_json_array() {
        let mut repo = WorkerRepository::new(MemoryStore::new());
        repo.save(&[Worker::with_counts("A", vec![1])]);
        let raw = repo.store().get(EXPERIMENT_DATA_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["dailyBeadCounts"], serde_json::json!([1]));
    }
}
