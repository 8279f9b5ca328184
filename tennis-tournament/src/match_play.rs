//! Match play - resolve a single match and hand out experience
//!
//! Level 3 - Step-level implementation

use serde::{Deserialize, Serialize};
use tennis_core::{score, PlayerId, Roster, SimError, Surface};
use tracing::debug;

use crate::config::MatchRewards;

/// Outcome of one league match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}

/// Play `first` against `second` on `surface` and commit rewards to the roster.
///
/// The first player wins only with a strictly higher score; on equal scores
/// the second player takes the match.
pub fn play_match(
    roster: &mut Roster,
    first: PlayerId,
    second: PlayerId,
    surface: Surface,
    rewards: MatchRewards,
) -> Result<MatchResult, SimError> {
    let first_score = score(roster.get(first)?, surface);
    let second_score = score(roster.get(second)?, surface);

    let result = if first_score > second_score {
        MatchResult {
            winner_id: first,
            loser_id: second,
        }
    } else {
        MatchResult {
            winner_id: second,
            loser_id: first,
        }
    };

    roster.award(result.winner_id, rewards.win)?;
    roster.award(result.loser_id, rewards.loss)?;

    debug!(
        "{} ({}) vs {} ({}) -> winner {}",
        first, first_score, second, second_score, result.winner_id
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tennis_core::{Hand, Player, Skills};

    fn make_roster(hands: &[Hand]) -> Roster {
        let players = hands
            .iter()
            .enumerate()
            .map(|(i, &hand)| Player::new(i as u32 + 1, hand, 0, Skills::default()))
            .collect();
        Roster::new(players).unwrap()
    }

    #[test]
    fn test_higher_score_wins() {
        let mut roster = make_roster(&[Hand::Right, Hand::Left]);
        let result = play_match(&mut roster, 1, 2, Surface::Clay, MatchRewards::LEAGUE).unwrap();
        assert_eq!(
            result,
            MatchResult {
                winner_id: 2,
                loser_id: 1
            }
        );
        assert_eq!(roster.get(2).unwrap().experience, 10);
        assert_eq!(roster.get(1).unwrap().experience, 1);
    }

    #[test]
    fn test_tie_goes_to_second_player() {
        let mut roster = make_roster(&[Hand::Right, Hand::Right]);
        let result = play_match(&mut roster, 1, 2, Surface::Hard, MatchRewards::ELIMINATION).unwrap();
        assert_eq!(result.winner_id, 2);
        assert_eq!(roster.get(2).unwrap().experience, 20);
        assert_eq!(roster.get(1).unwrap().experience, 10);

        // Swap order: the second seat still takes the tie
        let mut roster = make_roster(&[Hand::Right, Hand::Right]);
        let result = play_match(&mut roster, 2, 1, Surface::Hard, MatchRewards::LEAGUE).unwrap();
        assert_eq!(result.winner_id, 1);
    }

    #[test]
    fn test_unknown_player() {
        let mut roster = make_roster(&[Hand::Right]);
        let err = play_match(&mut roster, 1, 3, Surface::Grass, MatchRewards::LEAGUE).unwrap_err();
        assert!(matches!(err, SimError::UnknownPlayer(3)));
        // Nothing committed
        assert_eq!(roster.get(1).unwrap().experience, 0);
    }

    #[test]
    fn test_reward_overflow_is_error() {
        let players = vec![
            Player::new(1, Hand::Left, u32::MAX, Skills::default()),
            Player::new(2, Hand::Right, 0, Skills::default()),
        ];
        let mut roster = Roster::new(players).unwrap();
        let err = play_match(&mut roster, 1, 2, Surface::Clay, MatchRewards::LEAGUE).unwrap_err();
        assert!(matches!(err, SimError::ExperienceOverflow { player: 1 }));
        assert_eq!(roster.get(1).unwrap().experience, u32::MAX);
    }
}
