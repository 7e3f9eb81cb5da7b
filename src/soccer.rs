//! Soccer grid game: a 4x2 pitch, two players and one ball

pub mod action;
pub mod player;
pub mod position;
pub mod state;
pub mod transition;

pub use action::Action;
pub use player::{Player, PlayerId};
pub use position::Position;
pub use state::GameState;
pub use transition::TransitionEngine;

/// Pitch width (columns 0..=3)
pub const WIDTH: u8 = 4;

/// Pitch height (rows 0..=1)
pub const HEIGHT: u8 = 2;

/// Reward when the ball holder stands in column 0
pub const GOAL_REWARD: f64 = 100.0;
