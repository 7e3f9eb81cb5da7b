//! CLI infrastructure for the soccer learners
//!
//! This module provides the command-line interface for training a single
//! variant and comparing all four side by side.

pub mod commands;
pub mod config;
pub mod output;
