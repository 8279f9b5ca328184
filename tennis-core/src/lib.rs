//! Tennis Core - Domain records and scoring
//!
//! This crate provides the data side of the tennis simulation:
//! - Players with hand, experience and per-surface skills
//! - Tournaments (surface + format)
//! - The roster, an id-indexed mutable player collection
//! - The fixed match score formula
//! - Loading simulation input from JSON

pub mod error;
pub mod input;
pub mod player;
pub mod roster;
pub mod score;
pub mod tournament;

// Re-exports for convenient access
pub use error::SimError;
pub use input::SimulationInput;
pub use player::{Experience, Hand, Player, PlayerId, Skills};
pub use roster::Roster;
pub use score::{score, Score};
pub use tournament::{Surface, Tournament, TournamentId, TournamentKind};
