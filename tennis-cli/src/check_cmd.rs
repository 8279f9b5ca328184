//! Check command - validate an input file without simulating

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use tennis_core::{SimError, SimulationInput, Tournament, TournamentId, TournamentKind};
use tennis_tournament::check_bracket_size;

#[derive(Args)]
pub struct CheckArgs {
    /// Input JSON with players and tournaments
    #[arg(long, value_name = "FILE", default_value = "input.json")]
    pub input: PathBuf,
}

/// Load the input, validate ids, and flag tournaments that cannot run
pub fn run(args: CheckArgs) -> Result<()> {
    let (roster, tournaments) = SimulationInput::load(&args.input)
        .and_then(SimulationInput::into_parts)
        .with_context(|| format!("Invalid input: {}", args.input.display()))?;

    let problems = find_problems(roster.len(), &tournaments);
    for problem in &problems {
        tracing::warn!("{}", problem);
    }

    if problems.iter().any(|p| p.is_fatal()) {
        bail!("{} cannot be simulated", args.input.display());
    }

    println!(
        "OK: {} players, {} tournaments",
        roster.len(),
        tournaments.len()
    );
    Ok(())
}

#[derive(Debug)]
enum Problem {
    /// Elimination tournament the simulator would reject
    Bracket(SimError),
    UnknownType { tournament: TournamentId },
}

impl Problem {
    /// Unknown types are skipped during simulation; bad brackets abort it
    fn is_fatal(&self) -> bool {
        matches!(self, Problem::Bracket(_))
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::Bracket(err) => write!(f, "{}", err),
            Problem::UnknownType { tournament } => {
                write!(f, "tournament {}: unknown type, will be skipped", tournament)
            }
        }
    }
}

fn find_problems(players: usize, tournaments: &[Tournament]) -> Vec<Problem> {
    tournaments
        .iter()
        .filter_map(|tournament| match tournament.kind {
            TournamentKind::Elimination => check_bracket_size(tournament, players)
                .err()
                .map(Problem::Bracket),
            TournamentKind::Unknown => Some(Problem::UnknownType {
                tournament: tournament.id,
            }),
            TournamentKind::League => None,
        })
        .collect()
}
