use clap::Args;
use redbead_core::Config;

use super::{open_experiment, CommandResult};

#[derive(Args)]
pub struct ResetArgs {
    /// Confirm removal of all workers and their data; this cannot be undone
    #[arg(long)]
    pub yes: bool,
}

pub fn run(args: ResetArgs, config: &Config) -> CommandResult {
    if !args.yes {
        return Err("reset removes all workers and their data; pass --yes to confirm".into());
    }
    let mut exp = open_experiment(config)?;
    exp.reset();
    println!("experiment reset");
    Ok(())
}
