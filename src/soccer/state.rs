//! Game state, reward and the fixed configurations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    GOAL_REWARD, WIDTH,
    player::{Player, PlayerId},
    position::Position,
};

/// Ordered pair of players
///
/// Exactly one of the two players holds the ball. Equality and hashing are
/// by value and order-sensitive: player1 and player2 are distinct roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    player1: Player,
    player2: Player,
}

impl GameState {
    /// Create a state, validating ids and possession.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPlayerId`] if the players are not in
    /// slots one and two, or [`crate::Error::InvalidPossession`] unless
    /// exactly one of them holds the ball.
    pub fn new(player1: Player, player2: Player) -> Result<Self, crate::Error> {
        if player1.id != PlayerId::One {
            return Err(crate::Error::InvalidPlayerId {
                id: player1.id.number(),
            });
        }
        if player2.id != PlayerId::Two {
            return Err(crate::Error::InvalidPlayerId {
                id: player2.id.number(),
            });
        }
        if player1.has_ball == player2.has_ball {
            return Err(crate::Error::InvalidPossession {
                player1: player1.has_ball,
                player2: player2.has_ball,
            });
        }
        Ok(Self { player1, player2 })
    }

    /// Build from parts the transition rules already keep consistent
    pub(crate) fn from_parts(player1: Player, player2: Player) -> Self {
        debug_assert!(player1.id == PlayerId::One && player2.id == PlayerId::Two);
        debug_assert!(player1.has_ball != player2.has_ball);
        Self { player1, player2 }
    }

    /// Kick-off: player1 at (3,0) without the ball, player2 at (1,0) with it
    pub fn initial() -> Self {
        Self::from_parts(
            Player::new(PlayerId::One, Position::at(3, 0), false),
            Player::new(PlayerId::Two, Position::at(1, 0), true),
        )
    }

    /// Configuration whose (SOUTH[, STICK]) update is traced during training:
    /// player1 at (2,0) without the ball, player2 at (1,0) with it
    pub fn probe() -> Self {
        Self::from_parts(
            Player::new(PlayerId::One, Position::at(2, 0), false),
            Player::new(PlayerId::Two, Position::at(1, 0), true),
        )
    }

    pub fn player1(&self) -> &Player {
        &self.player1
    }

    pub fn player2(&self) -> &Player {
        &self.player2
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.player1,
            PlayerId::Two => &self.player2,
        }
    }

    /// The player holding the ball
    pub fn ball_holder(&self) -> &Player {
        if self.player1.has_ball {
            &self.player1
        } else {
            &self.player2
        }
    }

    /// +100 when the ball holder stands in column 0, -100 in column 3,
    /// otherwise 0. The row is irrelevant.
    pub fn reward(&self) -> f64 {
        match self.ball_holder().position.x() {
            0 => GOAL_REWARD,
            x if x == WIDTH - 1 => -GOAL_REWARD,
            _ => 0.0,
        }
    }

    /// A non-zero reward ends the episode
    pub fn is_terminal(&self) -> bool {
        self.reward() != 0.0
    }

    /// Every legal state: distinct squares are not required, possession is.
    pub fn all() -> impl Iterator<Item = GameState> {
        Position::all().flat_map(|p1| {
            Position::all().flat_map(move |p2| {
                [true, false].into_iter().map(move |p1_ball| {
                    Self::from_parts(
                        Player::new(PlayerId::One, p1, p1_ball),
                        Player::new(PlayerId::Two, p2, !p1_ball),
                    )
                })
            })
        })
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.player1, self.player2)
    }
}
