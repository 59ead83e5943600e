//! Worker records.
//!
//! A worker is one participant of the experiment. It carries an immutable
//! identity and the ordered list of bead counts it drew, one per day.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A single bead count observation.
pub type BeadCount = u32;

/// A participant and the bead counts recorded for them.
///
/// Serialized as `{"id": "...", "name": "...", "dailyBeadCounts": [...]}`.
/// Unknown fields are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    id: Uuid,
    pub name: String,
    /// Bead counts indexed by day (zero-based).
    #[serde(default)]
    pub daily_bead_counts: Vec<BeadCount>,
}

impl Worker {
    /// Create a worker with a fresh id and no samples.
    ///
    /// The name is taken as-is; trimming and emptiness checks belong to
    /// [`validate_worker_name`].
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_counts(name, Vec::new())
    }

    /// Create a worker with a fresh id and pre-existing samples.
    pub fn with_counts(name: impl Into<String>, daily_bead_counts: Vec<BeadCount>) -> Self {
        Self::with_id(Uuid::new_v4(), name, daily_bead_counts)
    }

    /// Create a worker under an id chosen by the caller.
    pub fn with_id(id: Uuid, name: impl Into<String>, daily_bead_counts: Vec<BeadCount>) -> Self {
        Self {
            id,
            name: name.into(),
            daily_bead_counts,
        }
    }

    /// Identifier assigned at creation; it never changes afterwards.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Arithmetic mean of the recorded counts, or 0 when nothing is recorded.
    pub fn average_bead_count(&self) -> f64 {
        if self.daily_bead_counts.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.daily_bead_counts.iter().map(|&c| u64::from(c)).sum();
        sum as f64 / self.daily_bead_counts.len() as f64
    }

    /// Number of days this worker has a sample for.
    pub fn days_recorded(&self) -> usize {
        self.daily_bead_counts.len()
    }

    /// Count recorded on `day`, if any.
    pub fn count_on(&self, day: usize) -> Option<BeadCount> {
        self.daily_bead_counts.get(day).copied()
    }
}

/// Trim a worker name and reject it if nothing is left.
pub fn validate_worker_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Parse raw user input as a bead count.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer in range is rejected.
pub fn parse_bead_count(input: &str) -> Result<BeadCount, ValidationError> {
    input
        .trim()
        .parse::<BeadCount>()
        .map_err(|_| ValidationError::InvalidBeadCount {
            input: input.to_string(),
        })
}
