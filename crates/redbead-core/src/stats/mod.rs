//! Statistics engine for the Red Bead Experiment
//!
//! Every function here is a pure function of the current worker collection:
//! per-day totals and averages, control limits over the pooled samples, and
//! the chart view built on top of them. Nothing is cached.

mod chart;
mod control_limits;
mod daily;

pub use chart::{day_label, ChartPoint, ControlChart, WorkerSeries, CONTROL_LIMIT_DASH_PATTERN};
pub use control_limits::{
    calculate_control_limits, ControlLimits, MINIMUM_BEAD_COUNT, STANDARD_DEVIATION_MULTIPLIER,
};
pub use daily::{average_beads_per_day, max_days, total_beads_per_day};
