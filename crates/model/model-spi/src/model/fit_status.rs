//! Outcome of a successful fit

use serde::{Deserialize, Serialize};

/// How a regressor's `fit` finished
///
/// Running out of iterations is not an error: the final weights are still
/// usable, so it is reported here as [`FitStatus::NonConvergence`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FitStatus {
    /// Exact closed-form solution
    Solved,
    /// Iterative solver reached its tolerance
    Converged { iterations: usize, cost: f64 },
    /// Iterative solver exhausted its iteration budget
    NonConvergence { iterations: usize, cost: f64 },
}

impl FitStatus {
    /// Whether the fit met its stopping criterion
    pub fn is_converged(&self) -> bool {
        !matches!(self, FitStatus::NonConvergence { .. })
    }

    /// Iterations performed (0 for closed-form fits)
    pub fn iterations(&self) -> usize {
        match self {
            FitStatus::Solved => 0,
            FitStatus::Converged { iterations, .. }
            | FitStatus::NonConvergence { iterations, .. } => *iterations,
        }
    }

    /// Final cost of an iterative fit
    pub fn cost(&self) -> Option<f64> {
        match self {
            FitStatus::Solved => None,
            FitStatus::Converged { cost, .. } | FitStatus::NonConvergence { cost, .. } => {
                Some(*cost)
            }
        }
    }
}
