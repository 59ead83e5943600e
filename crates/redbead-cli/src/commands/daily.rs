use clap::Args;
use redbead_core::Config;

use super::{open_experiment, CommandResult};

#[derive(Args)]
pub struct DailyArgs {
    /// One bead count per worker, in list order
    #[arg(required = true, allow_hyphen_values = true)]
    pub counts: Vec<String>,
}

pub fn run(args: DailyArgs, config: &Config) -> CommandResult {
    let mut exp = open_experiment(config)?;
    if exp.workers().is_empty() {
        return Err("no workers to record entries for".into());
    }

    let day = exp.next_day_number();
    let outcome = exp.record_daily_entry(args.counts.as_slice());
    if let Some(message) = outcome.failure_message() {
        return Err(message.into());
    }
    println!("Day {day}: saved {} of {} entries", outcome.saved, outcome.expected);
    Ok(())
}
