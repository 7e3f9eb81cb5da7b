//! `microlp` backend for [`LinearProgramSolver`]
//!
//! Each [`LinearProgram`] is rebuilt as a `microlp::Problem` on every call;
//! variables are declared in the same order so indices carry over.

use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};

use crate::{
    Error, Result,
    lp::program::{Bound, LinearProgram, Relation, Solution},
    ports::LinearProgramSolver,
};

/// Solver backed by the `microlp` simplex implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroLpSolver;

impl MicroLpSolver {
    pub fn new() -> Self {
        Self
    }
}

fn bounds(bound: Bound) -> (f64, f64) {
    match bound {
        Bound::Free => (f64::NEG_INFINITY, f64::INFINITY),
        Bound::NonNegative => (0.0, f64::INFINITY),
    }
}

fn comparison(relation: Relation) -> ComparisonOp {
    match relation {
        Relation::GreaterEq => ComparisonOp::Ge,
        Relation::LessEq => ComparisonOp::Le,
        Relation::Equal => ComparisonOp::Eq,
    }
}

impl LinearProgramSolver for MicroLpSolver {
    fn maximize(&mut self, program: &LinearProgram) -> Result<Solution> {
        let declared = program.num_variables();
        let mut problem = Problem::new(OptimizationDirection::Maximize);
        let variables: Vec<_> = program
            .bounds()
            .iter()
            .zip(program.objective())
            .map(|(&bound, &c)| problem.add_var(c, bounds(bound)))
            .collect();

        for constraint in program.constraints() {
            let mut expr = LinearExpr::empty();
            for &(variable, coefficient) in &constraint.terms {
                let var = variables
                    .get(variable.index())
                    .ok_or(Error::UnknownVariable {
                        index: variable.index(),
                        declared,
                    })?;
                expr.add(*var, coefficient);
            }
            problem.add_constraint(expr, comparison(constraint.relation), constraint.rhs);
        }

        let solved = problem.solve().map_err(|e| match e {
            microlp::Error::Infeasible => Error::Infeasible,
            microlp::Error::Unbounded => Error::Unbounded,
            #[allow(unreachable_patterns)]
            other => Error::Solver {
                message: other.to_string(),
            },
        })?;

        let values: Vec<f64> = variables.iter().map(|&var| solved[var]).collect();
        log::trace!(
            "solved LP with {declared} variables and {} constraints",
            program.constraints().len()
        );
        Ok(Solution {
            objective: solved.objective(),
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-7,
            "expected {expected}, got {actual}"
        );
    }

    fn value(solution: &Solution, variable: crate::lp::Variable) -> f64 {
        solution.value(variable).unwrap()
    }

    #[test]
    fn test_textbook_maximization() {
        // max 3x + 5y  s.t.  x <= 4, 2y <= 12, 3x + 2y <= 18
        let mut lp = LinearProgram::new();
        let x = lp.add_variable(Bound::NonNegative, 3.0);
        let y = lp.add_variable(Bound::NonNegative, 5.0);
        lp.add_constraint([(x, 1.0)], Relation::LessEq, 4.0);
        lp.add_constraint([(y, 2.0)], Relation::LessEq, 12.0);
        lp.add_constraint([(x, 3.0), (y, 2.0)], Relation::LessEq, 18.0);

        let solution = MicroLpSolver::new().maximize(&lp).unwrap();
        assert_close(solution.objective, 36.0);
        assert_close(value(&solution, x), 2.0);
        assert_close(value(&solution, y), 6.0);
    }

    #[test]
    fn test_greater_eq_rows() {
        // min x + y  s.t.  x + 2y >= 4, 3x + y >= 6
        let mut lp = LinearProgram::new();
        let x = lp.add_variable(Bound::NonNegative, -1.0);
        let y = lp.add_variable(Bound::NonNegative, -1.0);
        lp.add_constraint([(x, 1.0), (y, 2.0)], Relation::GreaterEq, 4.0);
        lp.add_constraint([(x, 3.0), (y, 1.0)], Relation::GreaterEq, 6.0);

        let solution = MicroLpSolver::new().maximize(&lp).unwrap();
        assert_close(solution.objective, -2.8);
        assert_close(value(&solution, x), 1.6);
        assert_close(value(&solution, y), 1.2);
    }

    #[test]
    fn test_equality_row() {
        let mut lp = LinearProgram::new();
        let x = lp.add_variable(Bound::NonNegative, 1.0);
        let y = lp.add_variable(Bound::NonNegative, 0.0);
        lp.add_constraint([(x, 1.0), (y, 1.0)], Relation::Equal, 1.0);

        let solution = MicroLpSolver::new().maximize(&lp).unwrap();
        assert_close(solution.objective, 1.0);
        assert_close(value(&solution, y), 0.0);
    }

    #[test]
    fn test_free_variable_goes_negative() {
        let mut lp = LinearProgram::new();
        let v = lp.add_variable(Bound::Free, 1.0);
        lp.add_constraint([(v, 1.0)], Relation::LessEq, -3.0);
        lp.add_constraint([(v, 1.0)], Relation::LessEq, 5.0);

        let solution = MicroLpSolver::new().maximize(&lp).unwrap();
        assert_close(solution.objective, -3.0);
        assert_close(value(&solution, v), -3.0);
    }

    #[test]
    fn test_matching_pennies_maximin() {
        let mut lp = LinearProgram::new();
        let v = lp.add_variable(Bound::Free, 1.0);
        let p1 = lp.add_variable(Bound::NonNegative, 0.0);
        let p2 = lp.add_variable(Bound::NonNegative, 0.0);
        lp.add_constraint([(p1, 1.0), (p2, -1.0), (v, -1.0)], Relation::GreaterEq, 0.0);
        lp.add_constraint([(p1, -1.0), (p2, 1.0), (v, -1.0)], Relation::GreaterEq, 0.0);
        lp.add_constraint([(p1, 1.0), (p2, 1.0)], Relation::Equal, 1.0);

        let solution = MicroLpSolver::new().maximize(&lp).unwrap();
        assert_close(solution.objective, 0.0);
        assert_close(value(&solution, p1), 0.5);
        assert_close(value(&solution, p2), 0.5);
    }

    #[test]
    fn test_detects_infeasible() {
        let mut lp = LinearProgram::new();
        let x = lp.add_variable(Bound::NonNegative, 1.0);
        lp.add_constraint([(x, 1.0)], Relation::LessEq, 1.0);
        lp.add_constraint([(x, 1.0)], Relation::GreaterEq, 2.0);

        assert!(matches!(MicroLpSolver::new().maximize(&lp), Err(Error::Infeasible)));
    }

    #[test]
    fn test_detects_unbounded() {
        let mut lp = LinearProgram::new();
        let x = lp.add_variable(Bound::NonNegative, 1.0);
        lp.add_constraint([(x, 1.0)], Relation::GreaterEq, 1.0);

        assert!(matches!(MicroLpSolver::new().maximize(&lp), Err(Error::Unbounded)));
    }

    #[test]
    fn test_rejects_foreign_variable() {
        let mut other = LinearProgram::new();
        other.add_variable(Bound::Free, 0.0);
        let foreign = other.add_variable(Bound::Free, 0.0);

        let mut lp = LinearProgram::new();
        lp.add_variable(Bound::Free, 1.0);
        lp.add_constraint([(foreign, 1.0)], Relation::LessEq, 1.0);

        assert!(matches!(
            MicroLpSolver::new().maximize(&lp),
            Err(Error::UnknownVariable {
                index: 1,
                declared: 1
            })
        ));
    }
}
