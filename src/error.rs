//! Error types for the soccer-q crate

use thiserror::Error;

/// Main error type for the soccer-q crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position ({x}, {y}) is off the 4x2 pitch")]
    InvalidPosition { x: u8, y: u8 },

    #[error("invalid player id {id} (expected 1 or 2)")]
    InvalidPlayerId { id: u8 },

    #[error("exactly one player must hold the ball (player1: {player1}, player2: {player2})")]
    InvalidPossession { player1: bool, player2: bool },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("linear program is infeasible")]
    Infeasible,

    #[error("linear program is unbounded")]
    Unbounded,

    #[error("LP solver failed: {message}")]
    Solver { message: String },

    #[error("linear program references variable {index} but declares only {declared}")]
    UnknownVariable { index: usize, declared: usize },

    #[error("invalid variant '{input}'. Expected one of: {expected}")]
    ParseVariant { input: String, expected: String },

    #[error("invalid policy model '{input}'. Expected one of: {expected}")]
    ParsePolicyModel { input: String, expected: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
