//! Maximin value of a two-player matrix game

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    lp::program::{Bound, LinearProgram, Relation, Solution, Variable},
    ports::LinearProgramSolver,
};

/// How the row player's mixed strategy enters the maximin program
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyModel {
    /// Row probabilities fixed to uniform; only the game value is a decision
    /// variable
    #[default]
    Uniform,
    /// Row probabilities are decision variables on the simplex
    Optimized,
}

impl PolicyModel {
    const NAMES: &'static str = "uniform, optimized";
}

impl FromStr for PolicyModel {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(PolicyModel::Uniform),
            "optimized" | "optimised" => Ok(PolicyModel::Optimized),
            _ => Err(Error::ParsePolicyModel {
                input: input.to_string(),
                expected: Self::NAMES.to_string(),
            }),
        }
    }
}

impl fmt::Display for PolicyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyModel::Uniform => write!(f, "uniform"),
            PolicyModel::Optimized => write!(f, "optimized"),
        }
    }
}

/// Game value and the row distribution behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixGameValue<const M: usize> {
    pub value: f64,
    pub policy: [f64; M],
}

fn solved_value(solution: &Solution, variable: Variable) -> Result<f64> {
    solution.value(variable).ok_or(Error::UnknownVariable {
        index: variable.index(),
        declared: solution.values.len(),
    })
}

/// Maximin value for the row player of `payoff`.
///
/// `payoff[i][j]` is the row player's payoff when it plays `i` and the
/// column player plays `j`. The program maximizes `v` subject to
/// `Σᵢ payoff[i][j]·pᵢ ≥ v` for every column `j`.
///
/// # Errors
///
/// Propagates solver failures. For the programs built here they only occur
/// on non-finite payoffs.
pub fn maximin<S, const M: usize, const N: usize>(
    payoff: &[[f64; N]; M],
    model: PolicyModel,
    solver: &mut S,
) -> Result<MatrixGameValue<M>>
where
    S: LinearProgramSolver + ?Sized,
{
    let mut program = LinearProgram::new();
    let v = program.add_variable(Bound::Free, 1.0);

    let result = match model {
        PolicyModel::Uniform => {
            let p = 1.0 / M as f64;
            for j in 0..N {
                let expected: f64 = payoff.iter().map(|row| row[j] * p).sum();
                program.add_constraint([(v, 1.0)], Relation::LessEq, expected);
            }
            let solution = solver.maximize(&program)?;
            MatrixGameValue {
                value: solved_value(&solution, v)?,
                policy: [p; M],
            }
        }
        PolicyModel::Optimized => {
            let probabilities: Vec<_> = (0..M)
                .map(|_| program.add_variable(Bound::NonNegative, 0.0))
                .collect();
            for j in 0..N {
                let terms = probabilities
                    .iter()
                    .zip(payoff.iter())
                    .map(|(&p, row)| (p, row[j]))
                    .chain([(v, -1.0)]);
                program.add_constraint(terms, Relation::GreaterEq, 0.0);
            }
            program.add_constraint(probabilities.iter().map(|&p| (p, 1.0)), Relation::Equal, 1.0);

            let solution = solver.maximize(&program)?;
            let mut policy = [0.0; M];
            for (slot, &p) in policy.iter_mut().zip(&probabilities) {
                *slot = solved_value(&solution, p)?.max(0.0);
            }
            let total: f64 = policy.iter().sum();
            if total > 0.0 {
                policy.iter_mut().for_each(|p| *p /= total);
            }
            MatrixGameValue {
                value: solved_value(&solution, v)?,
                policy,
            }
        }
    };

    debug_assert!(result.value.is_finite(), "maximin value must be finite");
    Ok(result)
}
