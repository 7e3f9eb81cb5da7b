//! Subcommands of the `soccer` binary

pub mod compare;
pub mod train;
