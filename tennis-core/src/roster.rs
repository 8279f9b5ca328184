//! Roster - the single mutable player collection shared by all simulators
//!
//! Players are addressed by id. Ids equal the 1-based position in the
//! loaded list, which `Roster::new` enforces, so lookup is a direct index.
//! The roster also remembers every player's experience at load time.

use crate::error::SimError;
use crate::player::{Experience, Player, PlayerId};

#[derive(Clone, Debug)]
pub struct Roster {
    players: Vec<Player>,
    baseline: Vec<Experience>,
}

impl Roster {
    /// Build a roster, checking that ids run 1..=n in list order
    pub fn new(players: Vec<Player>) -> Result<Self, SimError> {
        for (position, player) in players.iter().enumerate() {
            let expected = position as PlayerId + 1;
            if player.id != expected {
                return Err(SimError::NonContiguousId {
                    position,
                    expected,
                    found: player.id,
                });
            }
        }

        let baseline = players.iter().map(|p| p.experience).collect();
        Ok(Self { players, baseline })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in load order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Ids in load order
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }

    pub fn get(&self, id: PlayerId) -> Result<&Player, SimError> {
        let index = self.index_of(id)?;
        Ok(&self.players[index])
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Result<&mut Player, SimError> {
        let index = self.index_of(id)?;
        Ok(&mut self.players[index])
    }

    /// Add experience to the player with the given id
    pub fn award(&mut self, id: PlayerId, amount: Experience) -> Result<(), SimError> {
        self.get_mut(id)?.gain(amount)
    }

    /// Experience the player had when the roster was built
    pub fn initial_experience(&self, id: PlayerId) -> Result<Experience, SimError> {
        let index = self.index_of(id)?;
        Ok(self.baseline[index])
    }

    fn index_of(&self, id: PlayerId) -> Result<usize, SimError> {
        match (id as usize).checked_sub(1) {
            Some(index) if index < self.players.len() => Ok(index),
            _ => Err(SimError::UnknownPlayer(id)),
        }
    }
}
