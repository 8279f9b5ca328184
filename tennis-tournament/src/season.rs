//! Season execution - dispatch every tournament in input order
//!
//! Level 1 - Orchestration

use rand::Rng;
use serde::{Deserialize, Serialize};
use tennis_core::{PlayerId, Roster, SimError, Tournament, TournamentId, TournamentKind};
use tracing::{info, warn};

use crate::elimination::run_elimination;
use crate::league::run_league;
use crate::match_play::MatchResult;
use crate::ranking::{rank_players, RankingReport};

/// Winner of an elimination tournament
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    pub tournament_id: TournamentId,
    pub player_id: PlayerId,
}

/// Everything a season produced
#[derive(Clone, Debug, Default)]
pub struct SeasonOutcome {
    /// League match results across all league tournaments, in play order
    pub match_results: Vec<MatchResult>,
    /// One champion per elimination tournament
    pub champions: Vec<Champion>,
    /// Tournaments with an unknown type, left unplayed
    pub skipped: Vec<TournamentId>,
}

impl SeasonOutcome {
    /// Build the final ranking against the roster the season ran on
    pub fn ranking(&self, roster: &Roster) -> Result<RankingReport, SimError> {
        Ok(RankingReport::new(rank_players(roster, &self.match_results)?))
    }
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Run a season (Level 1 orchestration)
///
/// # Arguments
/// * `roster` - Players, mutated in place as matches are played
/// * `tournaments` - Tournaments, played in order
/// * `rng` - Source for league match order
///
/// # Returns
/// League match results, elimination champions and skipped tournaments
pub fn run_season<R: Rng + ?Sized>(
    roster: &mut Roster,
    tournaments: &[Tournament],
    rng: &mut R,
) -> Result<SeasonOutcome, SimError> {
    let mut outcome = SeasonOutcome::default();

    for tournament in tournaments {
        match tournament.kind {
            TournamentKind::League => {
                let results = run_league(tournament, roster, rng)?;
                outcome.match_results.extend(results);
            }
            TournamentKind::Elimination => {
                let bracket = run_elimination(tournament, roster)?;
                outcome.champions.push(Champion {
                    tournament_id: tournament.id,
                    player_id: bracket.winner,
                });
            }
            TournamentKind::Unknown => {
                warn!("Skipping tournament {}: unknown type", tournament.id);
                outcome.skipped.push(tournament.id);
            }
        }
    }

    info!(
        "Season done: {} league matches, {} champions, {} skipped",
        outcome.match_results.len(),
        outcome.champions.len(),
        outcome.skipped.len()
    );

    Ok(outcome)
}
