//! League tournament - round-robin in shuffled order
//!
//! Level 2 - Phase-level implementation

use rand::seq::SliceRandom;
use rand::Rng;
use tennis_core::{PlayerId, Roster, SimError, Tournament};
use tracing::info;

use crate::config::MatchRewards;
use crate::match_play::{play_match, MatchResult};

/// Run a league tournament over the whole roster (Level 2 phase)
///
/// Every unordered pair of players meets exactly once. Match order is
/// shuffled, and because experience is committed after each match the
/// order affects later scores.
pub fn run_league<R: Rng + ?Sized>(
    tournament: &Tournament,
    roster: &mut Roster,
    rng: &mut R,
) -> Result<Vec<MatchResult>, SimError> {
    let ids: Vec<PlayerId> = roster.ids().collect();
    let mut pairings = generate_pairings(&ids);
    pairings.shuffle(rng);

    let mut results = Vec::with_capacity(pairings.len());
    for (first, second) in pairings {
        let result = play_match(roster, first, second, tournament.surface, MatchRewards::LEAGUE)?;
        results.push(result);
    }

    info!(
        "League {} on {:?}: {} matches",
        tournament.id,
        tournament.surface,
        results.len()
    );

    Ok(results)
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// All unordered pairs, lower roster position first
fn generate_pairings(ids: &[PlayerId]) -> Vec<(PlayerId, PlayerId)> {
    let mut pairings = Vec::with_capacity(ids.len() * ids.len().saturating_sub(1) / 2);
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            pairings.push((ids[i], ids[j]));
        }
    }
    pairings
}
