//! Elimination tournament - single-elimination bracket in roster order
//!
//! Level 2 - Phase-level implementation
//!
//! Each round pairs entrants positionally, (0,1), (2,3), ... with no
//! shuffling. Winners advance in their bracket order. The field must be a
//! power of two; other sizes are rejected before any match is played.

use tennis_core::{PlayerId, Roster, SimError, Surface, Tournament};
use tracing::{debug, info};

use crate::config::MatchRewards;
use crate::match_play::play_match;

/// Result of an elimination tournament
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BracketOutcome {
    /// Last player standing
    pub winner: PlayerId,
    /// Number of rounds played, log2 of the field size
    pub rounds: u32,
}

/// Run an elimination tournament over the whole roster in load order
pub fn run_elimination(
    tournament: &Tournament,
    roster: &mut Roster,
) -> Result<BracketOutcome, SimError> {
    let entrants: Vec<PlayerId> = roster.ids().collect();
    run_bracket(tournament, roster, entrants)
}

/// Run an elimination bracket over the given entrants
pub fn run_bracket(
    tournament: &Tournament,
    roster: &mut Roster,
    entrants: Vec<PlayerId>,
) -> Result<BracketOutcome, SimError> {
    validate_bracket(tournament, roster, &entrants)?;

    let mut field = entrants;
    let mut rounds = 0;
    while field.len() > 1 {
        field = play_round(roster, &field, tournament.surface)?;
        rounds += 1;
        debug!(
            "Elimination {} round {}: {} advance",
            tournament.id,
            rounds,
            field.len()
        );
    }

    let winner = field[0];
    info!(
        "Elimination {} on {:?}: player {} wins after {} rounds",
        tournament.id, tournament.surface, winner, rounds
    );

    Ok(BracketOutcome { winner, rounds })
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Check that a field of `players` entrants can be bracketed
pub fn check_bracket_size(tournament: &Tournament, players: usize) -> Result<(), SimError> {
    if !players.is_power_of_two() {
        return Err(SimError::InvalidBracketSize {
            tournament: tournament.id,
            players,
        });
    }
    Ok(())
}

/// Check the field size and that every entrant exists
fn validate_bracket(
    tournament: &Tournament,
    roster: &Roster,
    entrants: &[PlayerId],
) -> Result<(), SimError> {
    check_bracket_size(tournament, entrants.len())?;
    for &id in entrants {
        roster.get(id)?;
    }
    Ok(())
}

/// Play one round and return the winners in bracket order
fn play_round(
    roster: &mut Roster,
    field: &[PlayerId],
    surface: Surface,
) -> Result<Vec<PlayerId>, SimError> {
    field
        .chunks_exact(2)
        .map(|pair| {
            play_match(roster, pair[0], pair[1], surface, MatchRewards::ELIMINATION)
                .map(|result| result.winner_id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tennis_core::{Hand, Player, Skills, TournamentKind};

    fn elimination(surface: Surface) -> Tournament {
        Tournament::new(9, surface, TournamentKind::Elimination)
    }

    fn plain_roster(n: u32) -> Roster {
        let players = (1..=n)
            .map(|id| Player::new(id, Hand::Right, 0, Skills::default()))
            .collect();
        Roster::new(players).unwrap()
    }

    fn experience(roster: &Roster) -> Vec<u32> {
        roster.players().iter().map(|p| p.experience).collect()
    }

    #[test]
    fn test_four_equal_players() {
        let mut roster = plain_roster(4);
        let outcome = run_elimination(&elimination(Surface::Clay), &mut roster).unwrap();

        // Ties go to the second seat: 2 and 4 advance, then 4 beats 2
        assert_eq!(outcome, BracketOutcome { winner: 4, rounds: 2 });
        assert_eq!(experience(&roster), vec![10, 30, 10, 40]);
    }

    #[test]
    fn test_pairing_is_positional() {
        // 1 and 3 are the strongest; a shuffled draw could pair them together
        let strong = Skills {
            clay: 5,
            grass: 5,
            hard: 5,
        };
        let players = vec![
            Player::new(1, Hand::Left, 0, strong),
            Player::new(2, Hand::Right, 0, Skills::default()),
            Player::new(3, Hand::Left, 0, strong),
            Player::new(4, Hand::Right, 0, Skills::default()),
        ];
        let mut roster = Roster::new(players).unwrap();

        let outcome = run_elimination(&elimination(Surface::Grass), &mut roster).unwrap();

        // 2 and 4 lost in round one
        assert_eq!(roster.get(2).unwrap().experience, 10);
        assert_eq!(roster.get(4).unwrap().experience, 10);
        // Final 1 vs 3 is a tie on score, so 3 wins
        assert_eq!(outcome.winner, 3);
        assert_eq!(roster.get(1).unwrap().experience, 30);
        assert_eq!(roster.get(3).unwrap().experience, 40);
    }

    #[test]
    fn test_rounds_are_log2() {
        for (n, k) in [(1u32, 0u32), (2, 1), (8, 3), (16, 4)] {
            let mut roster = plain_roster(n);
            let outcome = run_elimination(&elimination(Surface::Hard), &mut roster).unwrap();
            assert_eq!(outcome.rounds, k);
            assert!((1..=n).contains(&outcome.winner));
        }
    }

    #[test]
    fn test_single_entrant_wins_without_playing() {
        let mut roster = plain_roster(1);
        let outcome = run_elimination(&elimination(Surface::Clay), &mut roster).unwrap();
        assert_eq!(outcome, BracketOutcome { winner: 1, rounds: 0 });
        assert_eq!(experience(&roster), vec![0]);
    }

    #[test]
    fn test_odd_field_rejected_without_side_effects() {
        let mut roster = plain_roster(3);
        let err = run_elimination(&elimination(Surface::Clay), &mut roster).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidBracketSize {
                tournament: 9,
                players: 3
            }
        ));
        assert_eq!(experience(&roster), vec![0, 0, 0]);
    }

    #[test]
    fn test_even_non_power_of_two_rejected() {
        let mut roster = plain_roster(6);
        let err = run_elimination(&elimination(Surface::Clay), &mut roster).unwrap_err();
        assert!(matches!(err, SimError::InvalidBracketSize { players: 6, .. }));
    }

    #[test]
    fn test_empty_field_rejected() {
        let mut roster = plain_roster(0);
        let err = run_elimination(&elimination(Surface::Clay), &mut roster).unwrap_err();
        assert!(matches!(err, SimError::InvalidBracketSize { players: 0, .. }));
    }

    #[test]
    fn test_check_bracket_size() {
        let t = elimination(Surface::Clay);
        for ok in [1, 2, 4, 32] {
            assert!(check_bracket_size(&t, ok).is_ok());
        }
        for bad in [0, 3, 6, 12] {
            assert!(matches!(
                check_bracket_size(&t, bad),
                Err(SimError::InvalidBracketSize { tournament: 9, players }) if players == bad
            ));
        }
    }

    #[test]
    fn test_bracket_subset() {
        let mut roster = plain_roster(4);
        let outcome = run_bracket(&elimination(Surface::Hard), &mut roster, vec![3, 1]).unwrap();
        assert_eq!(outcome.winner, 1);
        assert_eq!(experience(&roster), vec![20, 0, 10, 0]);

        let err = run_bracket(&elimination(Surface::Hard), &mut roster, vec![1, 7]).unwrap_err();
        assert!(matches!(err, SimError::UnknownPlayer(7)));
    }
}
