//! SimulationInput - players and tournaments read from JSON
//!
//! Expected shape:
//! `{"players": [{id, hand, experience, skills}], "tournaments": [{id, surface, type}]}`

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SimError;
use crate::player::Player;
use crate::roster::Roster;
use crate::tournament::Tournament;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationInput {
    pub players: Vec<Player>,
    pub tournaments: Vec<Tournament>,
}

impl SimulationInput {
    /// Parse from a JSON string
    pub fn from_json(content: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Split into a validated roster and the tournament list
    pub fn into_parts(self) -> Result<(Roster, Vec<Tournament>), SimError> {
        let roster = Roster::new(self.players)?;
        Ok((roster, self.tournaments))
    }
}
