//! Soccer CLI - tabular multi-agent Q-learning on the 4x2 grid soccer game
//!
//! This CLI provides:
//! - Training one update rule and reporting its probe convergence
//! - Comparing Q-Learning, Friend-Q, Foe-Q and CE-Q side-by-side
//!
//! Diagnostics go through `log`; set `RUST_LOG=debug` for per-episode output.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "soccer")]
#[command(version, about = "Multi-agent Q-learning on grid soccer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a single variant
    Train(soccer_q::cli::commands::train::TrainArgs),

    /// Train every variant with the same settings
    Compare(soccer_q::cli::commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => soccer_q::cli::commands::train::execute(args),
        Commands::Compare(args) => soccer_q::cli::commands::compare::execute(args),
    }
}
