//! Stochastic resolution of simultaneous moves
//!
//! Both players pick an action at the same time, but the moves are executed
//! one after the other and either player is equally likely to go first. The
//! engine simulates both orders and samples one of the distinct outcomes.

use rand::Rng;

use super::{
    action::Action,
    player::{Player, PlayerId},
    state::GameState,
};

/// Applies one joint action to a state
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionEngine;

impl TransitionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Sample the next state for the joint action `(a1, a2)`.
    ///
    /// When both move orders agree the result is returned without drawing
    /// from `rng`; otherwise each outcome has probability one half.
    pub fn step<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        a1: Action,
        a2: Action,
        rng: &mut R,
    ) -> GameState {
        let first = resolve(state, PlayerId::One, a1, a2);
        let second = resolve(state, PlayerId::Two, a1, a2);
        if first == second || rng.random_range(0..2) == 0 {
            first
        } else {
            second
        }
    }

    /// Distinct successor states of `(a1, a2)`, player1-first outcome first
    pub fn reachable(&self, state: &GameState, a1: Action, a2: Action) -> Vec<GameState> {
        let first = resolve(state, PlayerId::One, a1, a2);
        let second = resolve(state, PlayerId::Two, a1, a2);
        if first == second {
            vec![first]
        } else {
            vec![first, second]
        }
    }
}

/// Outcome when `mover` executes its action before the other player
fn resolve(state: &GameState, mover: PlayerId, a1: Action, a2: Action) -> GameState {
    let (first, second, first_action, second_action) = match mover {
        PlayerId::One => (state.player1(), state.player2(), a1, a2),
        PlayerId::Two => (state.player2(), state.player1(), a2, a1),
    };
    let (first, second) = collide(*first, *second, first_action, second_action);
    match mover {
        PlayerId::One => GameState::from_parts(first, second),
        PlayerId::Two => GameState::from_parts(second, first),
    }
}

/// Possession and blocking rules for one move order
///
/// Running into the other player's current square leaves the ball with the
/// stationary player whatever the mover held before.
fn collide(mover: Player, other: Player, mover_action: Action, other_action: Action) -> (Player, Player) {
    let mover_dest = mover.position.step(mover_action);
    let other_dest = other.position.step(other_action);

    if mover_dest == other.position {
        return (
            mover.moved(mover.position, false),
            other.moved(other.position, true),
        );
    }

    if mover.has_ball {
        let other = if mover_dest == other_dest {
            other.moved(other.position, false)
        } else {
            other.moved(other_dest, false)
        };
        (mover.moved(mover_dest, true), other)
    } else if mover_dest == other_dest {
        (
            mover.moved(mover_dest, true),
            other.moved(other.position, false),
        )
    } else {
        (
            mover.moved(mover_dest, false),
            other.moved(other_dest, true),
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::soccer::Position;

    fn state(p1: (u8, u8), p2: (u8, u8), p1_ball: bool) -> GameState {
        GameState::new(
            Player::new(PlayerId::One, Position::new(p1.0, p1.1).unwrap(), p1_ball),
            Player::new(PlayerId::Two, Position::new(p2.0, p2.1).unwrap(), !p1_ball),
        )
        .unwrap()
    }

    #[test]
    fn test_kickoff_stick_west_scores() {
        let engine = TransitionEngine::new();
        let start = GameState::initial();
        let reachable = engine.reachable(&start, Action::Stick, Action::West);
        assert_eq!(reachable, vec![state((3, 0), (0, 0), false)]);
        assert_eq!(reachable[0].reward(), 100.0);
        assert!(reachable[0].is_terminal());
    }

    #[test]
    fn test_blocked_mover_loses_ball_regardless_of_possession() {
        let engine = TransitionEngine::new();
        // player1 tries to step onto player2's square
        for p1_ball in [true, false] {
            let start = state((1, 0), (2, 0), p1_ball);
            let outcomes = engine.reachable(&start, Action::East, Action::Stick);
            assert_eq!(outcomes[0], state((1, 0), (2, 0), false));
        }
    }

    #[test]
    fn test_ball_carrier_bumps_into_destination() {
        let engine = TransitionEngine::new();
        // both aim at (1,1); player1 carries the ball
        let start = state((0, 1), (2, 1), true);
        let outcomes = engine.reachable(&start, Action::East, Action::West);
        // player1 first keeps the ball at (1,1) and player2 stays put
        assert_eq!(outcomes[0], state((1, 1), (2, 1), true));
        // player2 first intercepts at (1,1) and player1 stays put
        assert_eq!(outcomes[1], state((0, 1), (1, 1), false));
    }

    #[test]
    fn test_mover_without_ball_hands_possession_to_other() {
        let engine = TransitionEngine::new();
        let start = state((0, 0), (3, 1), false);
        let outcomes = engine.reachable(&start, Action::South, Action::North);
        assert_eq!(outcomes, vec![state((0, 1), (3, 0), false)]);
    }

    #[test]
    fn test_coinciding_orders_do_not_consume_randomness() {
        let engine = TransitionEngine::new();
        let start = GameState::initial();
        let mut rng = StdRng::seed_from_u64(3);
        let mut untouched = StdRng::seed_from_u64(3);
        let next = engine.step(&start, Action::Stick, Action::West, &mut rng);
        assert_eq!(next, state((3, 0), (0, 0), false));
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    #[test]
    fn test_split_orders_sample_both_outcomes() {
        let engine = TransitionEngine::new();
        let start = state((0, 1), (2, 1), true);
        let outcomes = engine.reachable(&start, Action::East, Action::West);
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0usize; 2];
        for _ in 0..2_000 {
            let next = engine.step(&start, Action::East, Action::West, &mut rng);
            let idx = outcomes.iter().position(|s| *s == next).unwrap();
            counts[idx] += 1;
        }
        assert!(counts[0] > 850 && counts[1] > 850, "counts {counts:?}");
    }

    #[test]
    fn test_possession_invariant_over_all_transitions() {
        let engine = TransitionEngine::new();
        for start in GameState::all() {
            for a1 in Action::ALL {
                for a2 in Action::ALL {
                    for next in engine.reachable(&start, a1, a2) {
                        assert!(next.player1().has_ball != next.player2().has_ball);
                        assert_eq!(next.player1().id, PlayerId::One);
                    }
                }
            }
        }
    }
}
