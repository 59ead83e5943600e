use clap::Subcommand;
use redbead_core::stats::day_label;
use redbead_core::Config;

use super::{open_experiment, parse_worker_id, CommandResult};

#[derive(Subcommand)]
pub enum SampleAction {
    /// Append a bead count to a worker
    Add {
        /// Worker id
        worker_id: String,
        /// White bead count (non-negative integer)
        #[arg(allow_hyphen_values = true)]
        count: String,
    },
    /// Delete recorded days (zero-based) from a worker
    Remove {
        /// Worker id
        worker_id: String,
        /// Day positions to delete
        #[arg(required = true)]
        days: Vec<usize>,
    },
}

pub fn run(action: SampleAction, config: &Config) -> CommandResult {
    let mut exp = open_experiment(config)?;

    match action {
        SampleAction::Add { worker_id, count } => {
            let id = parse_worker_id(&worker_id)?;
            let count = exp.append_sample_input(id, &count)?;
            let day = exp.worker(id).map_or(0, |w| w.days_recorded());
            println!("{}: {count} beads", day_label(day.saturating_sub(1)));
        }
        SampleAction::Remove { worker_id, days } => {
            let id = parse_worker_id(&worker_id)?;
            let removed = exp.remove_samples(id, &days)?;
            println!("removed {removed} day(s)");
        }
    }
    Ok(())
}
