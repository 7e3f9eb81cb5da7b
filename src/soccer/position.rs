//! Grid coordinates and clamped movement

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{HEIGHT, WIDTH, action::Action};

/// A square on the 4x2 pitch
///
/// `x` grows eastward (0..=3), `y` grows southward (0..=1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Create a new position, validating it lies on the pitch.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if `x >= 4` or `y >= 2`.
    pub fn new(x: u8, y: u8) -> Result<Self, crate::Error> {
        if x < WIDTH && y < HEIGHT {
            Ok(Position { x, y })
        } else {
            Err(crate::Error::InvalidPosition { x, y })
        }
    }

    /// Const constructor for fixed configurations known to be on the pitch
    pub(crate) const fn at(x: u8, y: u8) -> Self {
        Position { x, y }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Destination after taking `action`; edges clamp, nothing wraps.
    pub fn step(self, action: Action) -> Position {
        let (dx, dy) = action.delta();
        Position {
            x: clamp_axis(self.x, dx, WIDTH),
            y: clamp_axis(self.y, dy, HEIGHT),
        }
    }

    /// Every square on the pitch, row-major
    pub fn all() -> impl Iterator<Item = Position> {
        (0..HEIGHT).flat_map(|y| (0..WIDTH).map(move |x| Position { x, y }))
    }
}

fn clamp_axis(value: u8, delta: i8, len: u8) -> u8 {
    match delta {
        d if d < 0 => value.saturating_sub(1),
        d if d > 0 => (value + 1).min(len - 1),
        _ => value,
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
