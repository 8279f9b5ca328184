//! Tennis simulation CLI
//!
//! Commands:
//! - simulate: Run every tournament and write the experience ranking
//! - check: Validate an input file without simulating

mod check_cmd;
mod simulate_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tennis-sim")]
#[command(about = "Tennis tournament simulator and experience ranker")]
struct Cli {
    /// Random seed for league match order (omit for a fresh order each run)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate all tournaments and write the ranking
    Simulate(simulate_cmd::SimulateArgs),
    /// Validate an input file
    Check(check_cmd::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => simulate_cmd::run(args, cli.seed),
        Commands::Check(args) => check_cmd::run(args),
    }
}

/// Log to stderr, `RUST_LOG` overrides the default `info` level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
