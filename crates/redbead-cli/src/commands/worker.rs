//! Worker management commands for CLI.

use clap::Subcommand;
use redbead_core::{Config, ValidationError};
use serde::Serialize;
use uuid::Uuid;

use super::{open_experiment, parse_worker_id, CommandResult};

#[derive(Subcommand)]
pub enum WorkerAction {
    /// Add a new worker
    Add {
        /// Worker name
        name: String,
    },
    /// List all workers in display order
    List,
    /// Show one worker with all recorded days
    Show {
        /// Worker id
        id: String,
    },
    /// Remove workers by list position (zero-based)
    Remove {
        /// Positions to remove
        #[arg(required = true)]
        positions: Vec<usize>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkerSummary<'a> {
    position: usize,
    id: Uuid,
    name: &'a str,
    days_recorded: usize,
    average_bead_count: f64,
}

pub fn run(action: WorkerAction, config: &Config) -> CommandResult {
    let mut exp = open_experiment(config)?;

    match action {
        WorkerAction::Add { name } => {
            let worker = exp.add_worker(&name)?;
            println!("{}", serde_json::to_string_pretty(worker)?);
        }
        WorkerAction::List => {
            let summaries: Vec<_> = exp
                .workers()
                .iter()
                .enumerate()
                .map(|(position, w)| WorkerSummary {
                    position,
                    id: w.id(),
                    name: &w.name,
                    days_recorded: w.days_recorded(),
                    average_bead_count: w.average_bead_count(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        WorkerAction::Show { id } => {
            let id = parse_worker_id(&id)?;
            let worker = exp
                .worker(id)
                .ok_or(ValidationError::UnknownWorker(id))?;
            println!("{}", serde_json::to_string_pretty(worker)?);
        }
        WorkerAction::Remove { positions } => {
            let removed = exp.remove_workers(&positions);
            println!("removed {removed} worker(s)");
        }
    }
    Ok(())
}
