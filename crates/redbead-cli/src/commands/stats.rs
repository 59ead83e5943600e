use clap::Subcommand;
use redbead_core::Config;
use serde::Serialize;

use super::{fmt_float, open_experiment, CommandResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Total beads per day across all workers
    Totals,
    /// Average beads per day across all workers
    Averages,
    /// Mean and control limits over all samples
    Limits {
        /// Print a one-line summary instead of JSON
        #[arg(long)]
        plain: bool,
    },
    /// Control chart data: per-worker series plus limits
    Chart,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartOutput<'a> {
    #[serde(flatten)]
    chart: &'a redbead_core::ControlChart,
    outside_limits: Vec<OutsidePoint<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutsidePoint<'a> {
    worker_name: &'a str,
    label: &'a str,
    count: u32,
}

pub fn run(action: StatsAction, config: &Config) -> CommandResult {
    let exp = open_experiment(config)?;

    match action {
        StatsAction::Totals => {
            println!("{}", serde_json::to_string_pretty(&exp.total_beads_per_day())?);
        }
        StatsAction::Averages => {
            println!("{}", serde_json::to_string_pretty(&exp.average_beads_per_day())?);
        }
        StatsAction::Limits { plain } => {
            let limits = exp.calculate_control_limits();
            if plain {
                println!(
                    "mean {} | upper {} | lower {}",
                    fmt_float(limits.mean, config),
                    fmt_float(limits.upper_limit, config),
                    fmt_float(limits.lower_limit, config),
                );
            } else {
                println!("{}", serde_json::to_string_pretty(&limits)?);
            }
        }
        StatsAction::Chart => {
            let chart = exp.control_chart();
            if chart.is_empty() {
                return Err("no data: add workers to see the control chart".into());
            }
            let outside_limits = chart
                .points_outside_limits()
                .into_iter()
                .map(|(worker_name, p)| OutsidePoint {
                    worker_name,
                    label: &p.label,
                    count: p.count,
                })
                .collect();
            let output = ChartOutput {
                chart: &chart,
                outside_limits,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
