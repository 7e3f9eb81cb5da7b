//! Player identity, location and possession

use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Which slot of the game state a player occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Parse the numeric id (1 or 2).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPlayerId`] for any other value.
    pub fn from_number(id: u8) -> Result<Self, crate::Error> {
        match id {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(crate::Error::InvalidPlayerId { id: other }),
        }
    }

    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// Immutable player snapshot
///
/// Two players are equal iff id, position and possession all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub position: Position,
    pub has_ball: bool,
}

impl Player {
    pub fn new(id: PlayerId, position: Position, has_ball: bool) -> Self {
        Self {
            id,
            position,
            has_ball,
        }
    }

    /// Same player relocated to `position` with the given possession
    pub fn moved(self, position: Position, has_ball: bool) -> Self {
        Self {
            position,
            has_ball,
            ..self
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}@{}", self.id.number(), self.position)?;
        if self.has_ball {
            write!(f, "*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_numbers() {
        assert_eq!(PlayerId::from_number(1).unwrap(), PlayerId::One);
        assert_eq!(PlayerId::from_number(2).unwrap(), PlayerId::Two);
        assert!(PlayerId::from_number(0).is_err());
        assert!(PlayerId::from_number(3).is_err());
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
    }

    #[test]
    fn test_value_equality() {
        let pos = Position::new(2, 0).unwrap();
        let a = Player::new(PlayerId::One, pos, false);
        assert_eq!(a, Player::new(PlayerId::One, pos, false));
        assert_ne!(a, Player::new(PlayerId::One, pos, true));
        assert_ne!(a, Player::new(PlayerId::Two, pos, false));
        assert_ne!(a, a.moved(Position::new(1, 0).unwrap(), false));
    }

    #[test]
    fn test_display_marks_ball() {
        let pos = Position::new(1, 0).unwrap();
        assert_eq!(Player::new(PlayerId::Two, pos, true).to_string(), "P2@(1, 0)*");
        assert_eq!(Player::new(PlayerId::One, pos, false).to_string(), "P1@(1, 0)");
    }
}
