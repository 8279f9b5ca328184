//! Simulate command - run a season and write the ranking
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_input(), simulate(), write_report()
//! - Level 4: configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tennis_core::{Roster, SimulationInput, Tournament};
use tennis_tournament::{run_season, RankingReport, SeasonConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Input JSON with players and tournaments
    #[arg(long, value_name = "FILE", default_value = "input.json")]
    pub input: PathBuf,

    /// Output JSON for the ranking
    #[arg(long, value_name = "FILE", default_value = "output.json")]
    pub output: PathBuf,

    /// Also print the ranking JSON to stdout
    #[arg(long)]
    pub print: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Load players and tournaments
/// 2. Play the season
/// 3. Write the ranking
pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    let (mut roster, tournaments) = load_input(&args)?;

    tracing::info!(
        "Starting season: {} players, {} tournaments",
        roster.len(),
        tournaments.len()
    );

    let config = SeasonConfig { seed };
    let report = simulate(&mut roster, &tournaments, &config)?;

    write_report(&report, &args)?;

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_input(args: &SimulateArgs) -> Result<(Roster, Vec<Tournament>)> {
    SimulationInput::load(&args.input)
        .and_then(SimulationInput::into_parts)
        .with_context(|| format!("Failed to load input: {}", args.input.display()))
}

/// Play every tournament and rank the roster
pub fn simulate(
    roster: &mut Roster,
    tournaments: &[Tournament],
    config: &SeasonConfig,
) -> Result<RankingReport> {
    let mut rng = config.create_rng();
    let outcome = run_season(roster, tournaments, &mut rng).context("Season simulation failed")?;

    for champion in &outcome.champions {
        tracing::info!(
            "Tournament {} champion: player {}",
            champion.tournament_id,
            champion.player_id
        );
    }

    let report = outcome.ranking(roster).context("Ranking failed")?;
    if let Some(leader) = report.leader() {
        tracing::info!(
            "Leader: player {} with {} experience",
            leader.player_id,
            leader.total_experience
        );
    }

    Ok(report)
}

fn write_report(report: &RankingReport, args: &SimulateArgs) -> Result<()> {
    report
        .save(&args.output)
        .with_context(|| format!("Failed to write output: {}", args.output.display()))?;
    tracing::info!("Ranking written to {}", args.output.display());

    if args.print {
        println!("{}", serde_json::to_string_pretty(report)?);
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
