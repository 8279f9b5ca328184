//! Match score formula
//!
//! score = 1 (base)
//!       + 2 if left-handed
//!       + 3 if experience > 0
//!       + 4 if the skill for the surface > 0

use crate::player::{Hand, Player};
use crate::tournament::Surface;

pub type Score = u32;

pub const BASE_SCORE: Score = 1;
pub const LEFT_HAND_BONUS: Score = 2;
pub const EXPERIENCE_BONUS: Score = 3;
pub const SURFACE_SKILL_BONUS: Score = 4;

/// Score of a player for a match on the given surface
pub fn score(player: &Player, surface: Surface) -> Score {
    let mut total = BASE_SCORE;
    if player.hand == Hand::Left {
        total += LEFT_HAND_BONUS;
    }
    if player.experience > 0 {
        total += EXPERIENCE_BONUS;
    }
    if player.skills.on(surface) > 0 {
        total += SURFACE_SKILL_BONUS;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Skills;

    fn player(hand: Hand, experience: u32, skills: Skills) -> Player {
        Player::new(1, hand, experience, skills)
    }

    #[test]
    fn test_base_score_only() {
        let p = player(Hand::Right, 0, Skills::default());
        assert_eq!(score(&p, Surface::Clay), 1);
    }

    #[test]
    fn test_all_bonuses() {
        let skills = Skills {
            clay: 5,
            grass: 0,
            hard: 0,
        };
        let p = player(Hand::Left, 1, skills);
        assert_eq!(score(&p, Surface::Clay), 10);
        // No surface bonus off clay
        assert_eq!(score(&p, Surface::Grass), 6);
    }

    #[test]
    fn test_negative_skill_gives_no_bonus() {
        let skills = Skills {
            clay: 0,
            grass: 0,
            hard: -3,
        };
        let p = player(Hand::Right, 7, skills);
        assert_eq!(score(&p, Surface::Hard), 4);
    }

    #[test]
    fn test_score_is_pure() {
        let p = player(Hand::Left, 3, Skills { clay: 1, grass: 1, hard: 1 });
        assert_eq!(score(&p, Surface::Hard), score(&p, Surface::Hard));
        assert_eq!(p.experience, 3);
    }
}
