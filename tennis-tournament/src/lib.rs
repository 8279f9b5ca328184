//! Tennis Tournament - Season simulation and experience ranking
//!
//! This crate provides the simulation side:
//! - League (round-robin) tournaments in shuffled match order
//! - Elimination brackets in roster order
//! - Experience aggregation and final ranking
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_season (orchestration)
//! - Level 2: run_league, run_elimination, rank_players (phases)
//! - Level 3: play_match, generate_pairings, play_round, check_bracket_size (steps)
//! - Level 4: rewards, configuration

mod config;
mod elimination;
mod league;
mod match_play;
mod ranking;
mod season;

pub use config::{MatchRewards, SeasonConfig};
pub use elimination::{check_bracket_size, run_bracket, run_elimination, BracketOutcome};
pub use league::run_league;
pub use match_play::{play_match, MatchResult};
pub use ranking::{rank_players, PlayerExperienceEntry, RankingReport};
pub use season::{run_season, Champion, SeasonOutcome};
