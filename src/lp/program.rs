//! Linear program description

use serde::{Deserialize, Serialize};

/// Sign restriction on a decision variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
    /// Any real value
    Free,
    /// `x >= 0`
    NonNegative,
}

/// Relation between a constraint's left-hand side and its right-hand side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    GreaterEq,
    LessEq,
    Equal,
}

/// Handle to a variable declared on a [`LinearProgram`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable(usize);

impl Variable {
    pub fn index(self) -> usize {
        self.0
    }
}

/// `Σ coefficient·x  (≥ | ≤ | =)  rhs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub terms: Vec<(Variable, f64)>,
    pub relation: Relation,
    pub rhs: f64,
}

/// Maximization problem over declared variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearProgram {
    bounds: Vec<Bound>,
    objective: Vec<f64>,
    constraints: Vec<Constraint>,
}

impl LinearProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable with its objective coefficient
    pub fn add_variable(&mut self, bound: Bound, objective: f64) -> Variable {
        self.bounds.push(bound);
        self.objective.push(objective);
        Variable(self.bounds.len() - 1)
    }

    pub fn add_constraint(
        &mut self,
        terms: impl IntoIterator<Item = (Variable, f64)>,
        relation: Relation,
        rhs: f64,
    ) {
        self.constraints.push(Constraint {
            terms: terms.into_iter().collect(),
            relation,
            rhs,
        });
    }

    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn num_variables(&self) -> usize {
        self.bounds.len()
    }

    /// Objective value of an assignment
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.objective
            .iter()
            .zip(values)
            .map(|(c, x)| c * x)
            .sum()
    }
}

/// Optimal objective value and the assignment achieving it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub objective: f64,
    pub values: Vec<f64>,
}

impl Solution {
    /// Value assigned to `variable`, or `None` if it was not declared on the
    /// solved program
    pub fn value(&self, variable: Variable) -> Option<f64> {
        self.values.get(variable.index()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_are_indexed_in_declaration_order() {
        let mut lp = LinearProgram::new();
        let a = lp.add_variable(Bound::Free, 1.0);
        let b = lp.add_variable(Bound::NonNegative, 0.0);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(lp.num_variables(), 2);
        assert_eq!(lp.bounds(), &[Bound::Free, Bound::NonNegative]);
    }

    #[test]
    fn test_solution_value_of_undeclared_variable() {
        let mut lp = LinearProgram::new();
        let a = lp.add_variable(Bound::Free, 1.0);
        let b = lp.add_variable(Bound::Free, 1.0);
        let solution = Solution {
            objective: 2.0,
            values: vec![2.0],
        };
        assert_eq!(solution.value(a), Some(2.0));
        assert_eq!(solution.value(b), None);
    }

    #[test]
    fn test_evaluate_objective() {
        let mut lp = LinearProgram::new();
        lp.add_variable(Bound::NonNegative, 3.0);
        lp.add_variable(Bound::NonNegative, -2.0);
        assert_eq!(lp.evaluate(&[1.0, 2.0]), -1.0);
    }
}
