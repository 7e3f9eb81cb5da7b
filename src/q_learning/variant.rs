//! The four update rules
//!
//! | Variant | Key | Backed-up value of s' |
//! |---------|-----|-----------------------|
//! | Independent-Q | (s, a) | max over own actions |
//! | Friend-Q | (s, a, o) | max over joint actions |
//! | Foe-Q | (s, a, o) | maximin of the 5x5 game Q(s', ·, ·) |
//! | Correlated-Q | (s, a, o) | same program as Foe-Q |

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::table::QKey;
use crate::{
    Error, Result,
    soccer::{Action, GameState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Q over own actions only; the opponent is part of the environment
    Independent,
    /// Joint-action Q; the opponent is assumed to help maximize
    Friend,
    /// Joint-action Q; the opponent is assumed to minimize
    Foe,
    /// Joint-action Q backed up through a correlated equilibrium. In this
    /// zero-sum game that equilibrium has the maximin value, so it solves the
    /// Foe-Q program.
    Correlated,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Independent,
        Variant::Friend,
        Variant::Foe,
        Variant::Correlated,
    ];

    const NAMES: &'static str = "q, friend-q, foe-q, ce-q";

    /// Whether keys carry the opponent's action
    pub fn is_joint(self) -> bool {
        !matches!(self, Variant::Independent)
    }

    /// Whether the backup goes through the linear program solver
    pub fn uses_solver(self) -> bool {
        matches!(self, Variant::Foe | Variant::Correlated)
    }

    /// Q-table key for a joint action taken in `state`
    pub fn key(self, state: GameState, own: Action, other: Action) -> QKey {
        if self.is_joint() {
            QKey::joint(state, own, other)
        } else {
            QKey::single(state, own)
        }
    }

    /// Key whose updates are recorded: the probe state with player1 moving
    /// SOUTH (and player2 sticking, for joint keys)
    pub fn probe_key(self) -> QKey {
        self.key(GameState::probe(), Action::South, Action::Stick)
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Independent => "Q-Learning",
            Variant::Friend => "Friend-Q",
            Variant::Foe => "Foe-Q",
            Variant::Correlated => "CE-Q",
        }
    }

    /// Short identifier used on the command line
    pub fn slug(self) -> &'static str {
        match self {
            Variant::Independent => "q",
            Variant::Friend => "friend-q",
            Variant::Foe => "foe-q",
            Variant::Correlated => "ce-q",
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "q" | "q-learning" | "independent" => Ok(Variant::Independent),
            "friend" | "friend-q" => Ok(Variant::Friend),
            "foe" | "foe-q" => Ok(Variant::Foe),
            "ce" | "ce-q" | "correlated" | "correlated-q" => Ok(Variant::Correlated),
            _ => Err(Error::ParseVariant {
                input: input.to_string(),
                expected: Self::NAMES.to_string(),
            }),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_shape() {
        let state = GameState::initial();
        let single = Variant::Independent.key(state, Action::East, Action::West);
        assert_eq!(single.other, None);
        for variant in [Variant::Friend, Variant::Foe, Variant::Correlated] {
            let joint = variant.key(state, Action::East, Action::West);
            assert_eq!(joint.other, Some(Action::West));
        }
    }

    #[test]
    fn test_probe_keys() {
        assert_eq!(
            Variant::Independent.probe_key(),
            QKey::single(GameState::probe(), Action::South)
        );
        assert_eq!(
            Variant::Foe.probe_key(),
            QKey::joint(GameState::probe(), Action::South, Action::Stick)
        );
    }

    #[test]
    fn test_parse_round_trips_slug() {
        for variant in Variant::ALL {
            assert_eq!(variant.slug().parse::<Variant>().unwrap(), variant);
        }
        assert!(matches!(
            "nash-q".parse::<Variant>(),
            Err(Error::ParseVariant { .. })
        ));
    }
}
