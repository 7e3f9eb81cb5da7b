//! Player actions

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five moves available to each player every step
///
/// The declaration order is the iteration order used for Q-table sweeps,
/// probability vectors and LP coefficient rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    North,
    South,
    East,
    West,
    Stick,
}

impl Action {
    /// Number of actions
    pub const COUNT: usize = 5;

    /// All actions in iteration order
    pub const ALL: [Action; Action::COUNT] = [
        Action::North,
        Action::South,
        Action::East,
        Action::West,
        Action::Stick,
    ];

    /// Position of this action in [`Action::ALL`]
    pub fn index(self) -> usize {
        match self {
            Action::North => 0,
            Action::South => 1,
            Action::East => 2,
            Action::West => 3,
            Action::Stick => 4,
        }
    }

    /// Action at `index` in [`Action::ALL`], if any
    pub fn from_index(index: usize) -> Option<Action> {
        Action::ALL.get(index).copied()
    }

    /// Column and row offsets before clamping
    pub fn delta(self) -> (i8, i8) {
        match self {
            Action::North => (0, -1),
            Action::South => (0, 1),
            Action::East => (1, 0),
            Action::West => (-1, 0),
            Action::Stick => (0, 0),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::North => "N",
            Action::South => "S",
            Action::East => "E",
            Action::West => "W",
            Action::Stick => "-",
        };
        write!(f, "{name}")
    }
}
