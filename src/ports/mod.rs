//! Ports (trait boundaries) for external collaborators.
//!
//! The learner owns these interfaces; progress reporting, metrics and the
//! numerical LP backend are adapters implementing them.

pub mod observer;
pub mod solver;

pub use observer::Observer;
pub use solver::LinearProgramSolver;
