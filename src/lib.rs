//! Multi-agent tabular Q-learning on a 4x2 grid soccer game
//!
//! This crate provides:
//! - The soccer environment: positions, actions and the stochastic
//!   transition engine with its blocking and possession rules
//! - Four update rules (Q-Learning, Friend-Q, Foe-Q, CE-Q) sharing one
//!   off-policy training loop
//! - A small linear-programming layer solving the matrix games behind
//!   Foe-Q and CE-Q backups
//! - Observers, a variant comparison runner and the `soccer` CLI

pub mod cli;
pub mod error;
pub mod lp;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod soccer;

pub use error::{Error, Result};
