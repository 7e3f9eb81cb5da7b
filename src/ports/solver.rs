//! Linear program solver port
//!
//! Learners that back up state values through a matrix game only need the
//! optimum of a small maximization problem. They depend on this trait rather
//! than on a particular numerical backend.

use crate::{
    Result,
    lp::{LinearProgram, Solution},
};

/// Capability to maximize a linear objective under linear constraints
///
/// # Examples
///
/// ```
/// use soccer_q::lp::{Bound, LinearProgram, MicroLpSolver, Relation};
/// use soccer_q::ports::LinearProgramSolver;
///
/// let mut lp = LinearProgram::new();
/// let v = lp.add_variable(Bound::Free, 1.0);
/// lp.add_constraint([(v, 1.0)], Relation::LessEq, 2.5);
/// lp.add_constraint([(v, 1.0)], Relation::LessEq, 4.0);
///
/// let solution = MicroLpSolver::new().maximize(&lp)?;
/// assert!((solution.objective - 2.5).abs() < 1e-9);
/// # Ok::<(), soccer_q::Error>(())
/// ```
pub trait LinearProgramSolver: Send {
    /// Maximize the program's objective.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Infeasible`] or [`crate::Error::Unbounded`]
    /// when no finite optimum exists.
    fn maximize(&mut self, program: &LinearProgram) -> Result<Solution>;
}

impl<S: LinearProgramSolver + ?Sized> LinearProgramSolver for Box<S> {
    fn maximize(&mut self, program: &LinearProgram) -> Result<Solution> {
        (**self).maximize(program)
    }
}
