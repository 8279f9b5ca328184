//! Player - a roster entry with skills and accumulated experience

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::tournament::Surface;

/// Player identifier, equal to the 1-based position in the input list
pub type PlayerId = u32;

/// Accumulated experience points
pub type Experience = u32;

/// Dominant hand
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Left,
    Right,
}

/// Skill rating per surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skills {
    pub clay: i32,
    pub grass: i32,
    pub hard: i32,
}

impl Skills {
    /// Rating for the given surface
    pub fn on(&self, surface: Surface) -> i32 {
        match surface {
            Surface::Clay => self.clay,
            Surface::Grass => self.grass,
            Surface::Hard => self.hard,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Hand,
    pub experience: Experience,
    pub skills: Skills,
}

impl Player {
    pub fn new(id: PlayerId, hand: Hand, experience: Experience, skills: Skills) -> Self {
        Self {
            id,
            hand,
            experience,
            skills,
        }
    }

    /// Add experience from a finished match
    pub fn gain(&mut self, amount: Experience) -> Result<(), SimError> {
        self.experience = self
            .experience
            .checked_add(amount)
            .ok_or(SimError::ExperienceOverflow { player: self.id })?;
        Ok(())
    }
}
