//! Error types for loading and simulating

use crate::player::PlayerId;
use crate::tournament::TournamentId;

/// Errors raised by the simulation libraries
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed input: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("player at position {position} has id {found}, expected {expected}")]
    NonContiguousId {
        position: usize,
        expected: PlayerId,
        found: PlayerId,
    },

    #[error("unknown player id {0}")]
    UnknownPlayer(PlayerId),

    #[error("experience of player {player} overflows")]
    ExperienceOverflow { player: PlayerId },

    #[error("elimination tournament {tournament} needs a power-of-two field, got {players} players")]
    InvalidBracketSize {
        tournament: TournamentId,
        players: usize,
    },
}
