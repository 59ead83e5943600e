//! # Red Bead Experiment Core Library
//!
//! This library records daily bead counts for the workers of a Red Bead
//! Experiment and computes statistical process control limits over them.
//! The CLI binary is a thin host over the same library.
//!
//! ## Architecture
//!
//! - **Workers**: participant identity plus an ordered series of daily counts
//! - **Statistics**: pure functions for per-day totals and averages, pooled
//!   `mean ± 3σ` control limits and the control chart view
//! - **Experiment**: the state container that owns the worker collection and
//!   writes it through to storage after every mutation
//! - **Storage**: a JSON document in a SQLite key-value table, plus TOML
//!   configuration
//!
//! ## Key Components
//!
//! - [`Experiment`]: Worker collection manager
//! - [`ControlLimits`]: Mean and control limits over all samples
//! - [`Database`]: Durable key-value store
//! - [`Config`]: Application configuration management

pub mod error;
pub mod experiment;
pub mod stats;
pub mod storage;
pub mod worker;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use experiment::{DailyEntryOutcome, Experiment};
pub use stats::{ControlChart, ControlLimits, CONTROL_LIMIT_DASH_PATTERN};
pub use storage::{Config, Database, KeyValueStore, MemoryStore, WorkerRepository};
pub use worker::{BeadCount, Worker};
