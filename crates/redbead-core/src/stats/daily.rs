//! Per-day aggregation across workers.
//!
//! Workers that have fewer recorded days than the longest series contribute
//! zero for the days they have not reported.

use crate::worker::Worker;

/// Number of days covered by the longest worker series.
pub fn max_days(workers: &[Worker]) -> usize {
    workers
        .iter()
        .map(Worker::days_recorded)
        .max()
        .unwrap_or(0)
}

/// Sum of bead counts per day across all workers.
///
/// The result has one entry per day up to [`max_days`]; it is empty when
/// there are no workers or no worker has any sample.
pub fn total_beads_per_day(workers: &[Worker]) -> Vec<u64> {
    (0..max_days(workers))
        .map(|day| {
            workers
                .iter()
                .map(|w| w.count_on(day).map(u64::from).unwrap_or(0))
                .sum()
        })
        .collect()
}

/// Daily totals divided by the current number of workers.
///
/// The divisor is always the full worker count, including workers that were
/// added after a given day and so contributed zero to it.
pub fn average_beads_per_day(workers: &[Worker]) -> Vec<f64> {
    if workers.is_empty() {
        return Vec::new();
    }
    let worker_count = workers.len() as f64;
    total_beads_per_day(workers)
        .into_iter()
        .map(|total| total as f64 / worker_count)
        .collect()
}
