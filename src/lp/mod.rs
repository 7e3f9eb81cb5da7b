//! Linear programming
//!
//! [`LinearProgram`] describes a maximization problem over free or
//! non-negative variables with `≥`, `≤` and `=` rows. [`MicroLpSolver`] is the
//! bundled [`crate::ports::LinearProgramSolver`] backend; the learners only
//! see the trait, so any other backend honouring it can be swapped in.
//!
//! [`matrix_game`] builds the maximin programs the equilibrium learners
//! solve for each successor state.

pub mod backend;
pub mod matrix_game;
pub mod program;

pub use backend::MicroLpSolver;
pub use matrix_game::{MatrixGameValue, PolicyModel, maximin};
pub use program::{Bound, Constraint, LinearProgram, Relation, Solution, Variable};
