//! Experience aggregation and final ranking
//!
//! Level 2 - Phase-level implementation
//!
//! Totals are rebuilt from load-time experience plus league match results
//! only: +10 per win, +1 per loss. Experience earned in elimination
//! brackets is never recorded as a match result and so does not count here.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tennis_core::{Experience, PlayerId, Roster, SimError};

use crate::config::MatchRewards;
use crate::match_play::MatchResult;

/// One row of the final ranking
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerExperienceEntry {
    /// 1-based rank
    pub order: usize,
    pub player_id: PlayerId,
    pub gained_experience: Experience,
    pub total_experience: Experience,
}

/// Ranking wrapped for output as `{"results": [...]}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingReport {
    pub results: Vec<PlayerExperienceEntry>,
}

impl RankingReport {
    pub fn new(results: Vec<PlayerExperienceEntry>) -> Self {
        Self { results }
    }

    /// Top-ranked entry
    pub fn leader(&self) -> Option<&PlayerExperienceEntry> {
        self.results.first()
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> Result<(), SimError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Rank every roster player by total experience, highest first.
///
/// Equal totals are ordered by ascending player id.
pub fn rank_players(
    roster: &Roster,
    results: &[MatchResult],
) -> Result<Vec<PlayerExperienceEntry>, SimError> {
    let totals = compute_totals(roster, results)?;

    let mut standings: Vec<(PlayerId, Experience)> = roster
        .ids()
        .map(|id| (id, totals[&id]))
        .collect();
    standings.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut entries = Vec::with_capacity(standings.len());
    for (i, (player_id, total)) in standings.into_iter().enumerate() {
        let initial = roster.initial_experience(player_id)?;
        entries.push(PlayerExperienceEntry {
            order: i + 1,
            player_id,
            gained_experience: total - initial,
            total_experience: total,
        });
    }
    Ok(entries)
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

fn compute_totals(
    roster: &Roster,
    results: &[MatchResult],
) -> Result<FxHashMap<PlayerId, Experience>, SimError> {
    let mut totals: FxHashMap<PlayerId, Experience> = FxHashMap::default();
    for id in roster.ids() {
        totals.insert(id, roster.initial_experience(id)?);
    }

    let rewards = MatchRewards::LEAGUE;
    for result in results {
        add_experience(&mut totals, result.winner_id, rewards.win)?;
        add_experience(&mut totals, result.loser_id, rewards.loss)?;
    }

    Ok(totals)
}

fn add_experience(
    totals: &mut FxHashMap<PlayerId, Experience>,
    player: PlayerId,
    amount: Experience,
) -> Result<(), SimError> {
    let total = totals
        .get_mut(&player)
        .ok_or(SimError::UnknownPlayer(player))?;
    *total = total
        .checked_add(amount)
        .ok_or(SimError::ExperienceOverflow { player })?;
    Ok(())
}
