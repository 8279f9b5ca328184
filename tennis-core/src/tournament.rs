//! Tournament - surface and format of a single event

use serde::{Deserialize, Serialize};

pub type TournamentId = u32;

/// Court surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Clay,
    Grass,
    Hard,
}

/// Tournament format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentKind {
    /// Single-elimination bracket in roster order
    Elimination,
    /// Round-robin, every pair meets once
    League,
    /// Any other format string; skipped when simulating
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub surface: Surface,
    #[serde(rename = "type")]
    pub kind: TournamentKind,
}

impl Tournament {
    pub fn new(id: TournamentId, surface: Surface, kind: TournamentKind) -> Self {
        Self { id, surface, kind }
    }
}
