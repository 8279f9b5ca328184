//! Rewards and season configuration
//!
//! Level 4 - Utilities and configuration

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tennis_core::Experience;

/// Experience handed out after a single match
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchRewards {
    pub win: Experience,
    pub loss: Experience,
}

impl MatchRewards {
    /// League match: +10 winner, +1 loser
    pub const LEAGUE: MatchRewards = MatchRewards { win: 10, loss: 1 };

    /// Elimination match: +20 winner, +10 loser
    pub const ELIMINATION: MatchRewards = MatchRewards { win: 20, loss: 10 };
}

/// Season configuration
#[derive(Clone, Debug, Default)]
pub struct SeasonConfig {
    /// Random seed for league match order (None = fresh entropy per run)
    pub seed: Option<u64>,
}

impl SeasonConfig {
    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create RNG from seed or random
    pub fn create_rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
