//! Control limits over the pooled sample population.
//!
//! All samples from all workers and all days are pooled into one population.
//! The limits are `mean ± 3σ` using the population standard deviation, with
//! the lower limit clamped at zero since bead counts cannot be negative.

use serde::{Deserialize, Serialize};

use crate::worker::Worker;

/// Number of standard deviations between the mean and each control limit.
pub const STANDARD_DEVIATION_MULTIPLIER: f64 = 3.0;

/// Floor applied to the lower control limit.
pub const MINIMUM_BEAD_COUNT: f64 = 0.0;

/// Mean and control limits of the pooled sample population.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlLimits {
    pub mean: f64,
    pub upper_limit: f64,
    pub lower_limit: f64,
}

impl ControlLimits {
    /// Distance from the mean to the upper limit (`3σ`).
    pub fn spread(&self) -> f64 {
        self.upper_limit - self.mean
    }

    /// Whether `count` falls within `[lower_limit, upper_limit]`.
    pub fn contains(&self, count: f64) -> bool {
        count >= self.lower_limit && count <= self.upper_limit
    }
}

/// Compute the mean and `mean ± 3σ` limits over every recorded sample.
///
/// Returns all zeros when nothing has been recorded.
pub fn calculate_control_limits(workers: &[Worker]) -> ControlLimits {
    let all_counts: Vec<f64> = workers
        .iter()
        .flat_map(|w| w.daily_bead_counts.iter().map(|&c| f64::from(c)))
        .collect();

    if all_counts.is_empty() {
        return ControlLimits::default();
    }

    let n = all_counts.len() as f64;
    let mean = all_counts.iter().sum::<f64>() / n;
    let variance = all_counts.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / n;
    let standard_deviation = variance.sqrt();

    ControlLimits {
        mean,
        upper_limit: mean + STANDARD_DEVIATION_MULTIPLIER * standard_deviation,
        lower_limit: (mean - STANDARD_DEVIATION_MULTIPLIER * standard_deviation)
            .max(MINIMUM_BEAD_COUNT),
    }
}
