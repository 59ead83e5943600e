use clap::{Parser, Subcommand};
use redbead_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "redbead", version, about = "Red Bead Experiment CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Worker management
    Worker {
        #[command(subcommand)]
        action: commands::worker::WorkerAction,
    },
    /// Record or delete a single worker's samples
    Sample {
        #[command(subcommand)]
        action: commands::sample::SampleAction,
    },
    /// Record one day's bead counts for every worker, in list order
    Daily(commands::daily::DailyArgs),
    /// Daily aggregates and control limits
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Remove all workers and their data
    Reset(commands::reset::ResetArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_tracing(&config);
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "using default configuration");
    }

    let result = match cli.command {
        Commands::Worker { action } => commands::worker::run(action, &config),
        Commands::Sample { action } => commands::sample::run(action, &config),
        Commands::Daily(args) => commands::daily::run(args, &config),
        Commands::Stats { action } => commands::stats::run(action, &config),
        Commands::Reset(args) => commands::reset::run(args, &config),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions(args) => {
            commands::completions::generate_completions::<Cli>(args.shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
