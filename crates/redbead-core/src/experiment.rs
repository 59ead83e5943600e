//! The experiment state container.
//!
//! [`Experiment`] owns the authoritative worker collection together with its
//! persistence adapter. Every mutation that changes the collection is followed
//! by exactly one write-through save; rejected input leaves both the
//! collection and storage untouched. Statistics are computed on demand from
//! the current collection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::stats::{self, ControlChart, ControlLimits};
use crate::storage::{KeyValueStore, WorkerRepository};
use crate::worker::{parse_bead_count, validate_worker_name, BeadCount, Worker};

/// Result of recording one day's entries for every worker at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntryOutcome {
    /// Entries that were parsed and appended.
    pub saved: usize,
    /// Number of workers an entry was expected for.
    pub expected: usize,
}

impl DailyEntryOutcome {
    pub fn is_complete(&self) -> bool {
        self.saved == self.expected
    }

    /// Message to show when some entries could not be saved.
    pub fn failure_message(&self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        Some(format!(
            "Could not save all entries. Only {} of {} were saved successfully.",
            self.saved, self.expected
        ))
    }
}

/// Worker collection plus the store it is written through to.
pub struct Experiment<S> {
    workers: Vec<Worker>,
    repository: WorkerRepository<S>,
}

impl<S: KeyValueStore> Experiment<S> {
    /// Open the experiment, loading any previously saved workers.
    pub fn open(store: S) -> Self {
        let repository = WorkerRepository::new(store);
        let workers = repository.load();
        Self {
            workers,
            repository,
        }
    }

    /// Workers in display order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn worker(&self, id: Uuid) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id() == id)
    }

    pub fn repository(&self) -> &WorkerRepository<S> {
        &self.repository
    }

    /// Add a worker with the given name and no samples.
    ///
    /// The name is trimmed; an empty name is rejected and nothing changes.
    pub fn add_worker(&mut self, name: &str) -> Result<&Worker, ValidationError> {
        let name = validate_worker_name(name).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected worker");
        })?;
        let mut id = Uuid::new_v4();
        while self.worker(id).is_some() {
            id = Uuid::new_v4();
        }
        let worker = Worker::with_id(id, name, Vec::new());
        tracing::info!(id = %worker.id(), name = %worker.name, "added worker");
        self.workers.push(worker);
        self.persist();
        Ok(&self.workers[self.workers.len() - 1])
    }

    /// Remove workers at the given positions.
    ///
    /// Out-of-range and duplicate positions are ignored. Returns how many
    /// workers were removed.
    pub fn remove_workers(&mut self, positions: &[usize]) -> usize {
        let removed = remove_positions(&mut self.workers, positions);
        if removed > 0 {
            tracing::info!(removed, "removed workers");
            self.persist();
        }
        removed
    }

    /// Append a validated bead count to one worker's series.
    pub fn append_sample(&mut self, worker_id: Uuid, count: BeadCount) -> Result<(), ValidationError> {
        let worker = self
            .workers
            .iter_mut()
            .find(|w| w.id() == worker_id)
            .ok_or(ValidationError::UnknownWorker(worker_id))?;
        worker.daily_bead_counts.push(count);
        tracing::debug!(id = %worker_id, count, "appended sample");
        self.persist();
        Ok(())
    }

    /// Parse raw input and append it to one worker's series.
    ///
    /// Negative or non-numeric input is rejected before anything changes.
    pub fn append_sample_input(&mut self, worker_id: Uuid, input: &str) -> Result<BeadCount, ValidationError> {
        let count = parse_bead_count(input).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected sample");
        })?;
        self.append_sample(worker_id, count)?;
        Ok(count)
    }

    /// Remove samples at the given day positions from one worker.
    ///
    /// Out-of-range and duplicate positions are ignored. Returns how many
    /// samples were removed.
    pub fn remove_samples(&mut self, worker_id: Uuid, days: &[usize]) -> Result<usize, ValidationError> {
        let worker = self
            .workers
            .iter_mut()
            .find(|w| w.id() == worker_id)
            .ok_or(ValidationError::UnknownWorker(worker_id))?;
        let removed = remove_positions(&mut worker.daily_bead_counts, days);
        if removed > 0 {
            tracing::debug!(id = %worker_id, removed, "removed samples");
            self.persist();
        }
        Ok(removed)
    }

    /// Record one day's entry for every worker, in collection order.
    ///
    /// Each input that parses as a non-negative integer is appended to the
    /// worker at the same position; the rest are skipped. Appends that
    /// succeeded are kept even when others fail.
    pub fn record_daily_entry<T: AsRef<str>>(&mut self, inputs: &[T]) -> DailyEntryOutcome {
        let expected = self.workers.len();
        let mut saved = 0;

        for (worker, input) in self.workers.iter_mut().zip(inputs) {
            match parse_bead_count(input.as_ref()) {
                Ok(count) => {
                    worker.daily_bead_counts.push(count);
                    saved += 1;
                }
                Err(e) => {
                    tracing::warn!(id = %worker.id(), error = %e, "skipped daily entry");
                }
            }
        }

        if saved > 0 {
            self.persist();
        }
        let outcome = DailyEntryOutcome { saved, expected };
        if !outcome.is_complete() {
            tracing::warn!(saved, expected, "daily entry partially saved");
        }
        outcome
    }

    /// Remove every worker.
    pub fn reset(&mut self) {
        self.workers.clear();
        tracing::info!("experiment reset");
        self.persist();
    }

    /// 1-based number of the next day to record, based on the first worker.
    pub fn next_day_number(&self) -> usize {
        self.workers.first().map_or(0, Worker::days_recorded) + 1
    }

    pub fn total_beads_per_day(&self) -> Vec<u64> {
        stats::total_beads_per_day(&self.workers)
    }

    pub fn average_beads_per_day(&self) -> Vec<f64> {
        stats::average_beads_per_day(&self.workers)
    }

    pub fn calculate_control_limits(&self) -> ControlLimits {
        stats::calculate_control_limits(&self.workers)
    }

    pub fn control_chart(&self) -> ControlChart {
        ControlChart::build(&self.workers)
    }

    fn persist(&mut self) {
        // In-memory state stays authoritative if this fails.
        self.repository.save(&self.workers);
    }
}

/// Remove the elements at `positions`, ignoring duplicates and out-of-range
/// indices. Returns how many elements were removed.
fn remove_positions<T>(items: &mut Vec<T>, positions: &[usize]) -> usize {
    let targets: BTreeSet<usize> = positions
        .iter()
        .copied()
        .filter(|&p| p < items.len())
        .collect();
    // Highest first so earlier indices stay valid.
    for &p in targets.iter().rev() {
        items.remove(p);
    }
    targets.len()
}
