//! Gradient-descent linear regression
//!
//! Minimizes the half mean squared error `Σ(ŷ - y)² / 2m` with plain batch
//! gradient descent. Datasets here are one benchmark curve per sorting
//! method (tens of points), so every iteration uses the full batch and the
//! result is deterministic.
//!
//! ## When to Use
//!
//! - Features already standardized (see
//!   [`StandardScaler`](crate::preprocessing::StandardScaler))
//! - When per-iteration progress or cancellation is needed

use model_api::{
    CancellationToken, FeatureMatrix, FitObserver, FitStatus, IterationEvent, ModelError,
    NoopObserver, Regressor, Result, SgdConfig,
};
use nalgebra::{DMatrix, DVector};
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq)]
struct FittedParams {
    weights: DVector<f64>,
    bias: f64,
    status: FitStatus,
}

/// Uninitialized until the first successful fit. The transient fitting
/// phase lives entirely inside `fit`.
#[derive(Debug, Clone, Default, PartialEq)]
enum SolverState {
    #[default]
    Uninitialized,
    Fitted(FittedParams),
}

/// Linear regressor trained by batch gradient descent
///
/// Each iteration computes `ŷ = X·w + b`, the residual `e = ŷ - y`, the
/// gradients `Xᵀ·e / m` and `Σe / m`, applies the update scaled by the
/// learning rate, then evaluates the cost with the updated parameters.
/// Fitting stops early once the cost drops below the tolerance; otherwise
/// it stops after `max_iterations` and reports
/// [`FitStatus::NonConvergence`] while keeping the final estimate.
///
/// `batch_size` from [`SgdConfig`] does not change the update: the gradient
/// is always taken over every sample.
///
/// # Example
///
/// ```rust
/// use model_core::regression::SgdRegressor;
/// use model_api::{FeatureMatrix, Regressor, SgdConfig};
///
/// let x = FeatureMatrix::from_column(&[-1.0, 0.0, 1.0]).unwrap();
/// let y = vec![1.0, 3.0, 5.0];
///
/// let mut model = SgdRegressor::new(SgdConfig::new(0.1, 1000)).unwrap();
/// let status = model.fit(&x, &y).unwrap();
/// assert!(status.is_converged());
/// ```
#[derive(Debug, Clone)]
pub struct SgdRegressor {
    config: SgdConfig,
    state: SolverState,
    cost_history: Vec<f64>,
    cancellation: Option<CancellationToken>,
}

impl SgdRegressor {
    /// Create a regressor after validating `config`
    pub fn new(config: SgdConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: SolverState::Uninitialized,
            cost_history: Vec::new(),
            cancellation: None,
        })
    }

    /// Check `token` at the top of every iteration
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn config(&self) -> &SgdConfig {
        &self.config
    }

    /// Status of the last successful fit
    pub fn status(&self) -> Option<FitStatus> {
        match &self.state {
            SolverState::Fitted(params) => Some(params.status),
            SolverState::Uninitialized => None,
        }
    }

    /// Cost after every iteration of the last successful fit
    pub fn cost_history(&self) -> &[f64] {
        &self.cost_history
    }

    /// Half mean squared error of the current parameters on (`x`, `y`)
    pub fn compute_cost(&self, x: &FeatureMatrix, y: &[f64]) -> Result<f64> {
        let params = self.fitted()?;
        x.ensure_columns(params.weights.len())?;
        x.ensure_targets(y)?;
        Ok(half_mse(
            x.as_matrix(),
            &params.weights,
            params.bias,
            &DVector::from_column_slice(y),
        ))
    }

    /// Fit while reporting every iteration to `observer`
    ///
    /// On error (including [`ModelError::Cancelled`]) the previously fitted
    /// parameters are kept.
    pub fn fit_observed(
        &mut self,
        x: &FeatureMatrix,
        y: &[f64],
        observer: &mut dyn FitObserver,
    ) -> Result<FitStatus> {
        x.ensure_targets(y)?;

        let data = x.as_matrix();
        let targets = DVector::from_column_slice(y);
        let m = x.nrows() as f64;
        let learning_rate = self.config.learning_rate;

        let mut weights = DVector::<f64>::zeros(x.ncols());
        let mut bias = 0.0;
        let mut history = Vec::with_capacity(self.config.max_iterations.min(4096));
        let mut cost = f64::INFINITY;
        let mut converged_at = None;

        for iteration in 0..self.config.max_iterations {
            if self.is_cancelled() {
                debug!(iteration, "gradient descent cancelled");
                return Err(ModelError::Cancelled);
            }

            let residual = (data * &weights).add_scalar(bias) - &targets;
            let weight_gradient = data.tr_mul(&residual) / m;
            let bias_gradient = residual.sum() / m;

            weights.axpy(-learning_rate, &weight_gradient, 1.0);
            bias -= learning_rate * bias_gradient;

            cost = half_mse(data, &weights, bias, &targets);
            if !cost.is_finite() {
                return Err(ModelError::NumericalError(format!(
                    "cost diverged at iteration {} (learning rate {})",
                    iteration, learning_rate
                )));
            }

            trace!(iteration, cost, "gradient descent step");
            observer.on_iteration(&IterationEvent { iteration, cost });
            history.push(cost);

            if cost < self.config.tolerance {
                converged_at = Some(iteration + 1);
                break;
            }
        }

        let status = match converged_at {
            Some(iterations) => FitStatus::Converged { iterations, cost },
            None => FitStatus::NonConvergence {
                iterations: self.config.max_iterations,
                cost,
            },
        };
        debug!(
            samples = x.nrows(),
            features = x.ncols(),
            iterations = status.iterations(),
            cost,
            converged = status.is_converged(),
            "gradient descent finished"
        );

        self.state = SolverState::Fitted(FittedParams {
            weights,
            bias,
            status,
        });
        self.cost_history = history;
        Ok(status)
    }

    fn fitted(&self) -> Result<&FittedParams> {
        match &self.state {
            SolverState::Fitted(params) => Ok(params),
            SolverState::Uninitialized => Err(ModelError::NotFitted),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

impl Default for SgdRegressor {
    fn default() -> Self {
        Self {
            config: SgdConfig::default(),
            state: SolverState::Uninitialized,
            cost_history: Vec::new(),
            cancellation: None,
        }
    }
}

impl Regressor for SgdRegressor {
    fn fit(&mut self, x: &FeatureMatrix, y: &[f64]) -> Result<FitStatus> {
        self.fit_observed(x, y, &mut NoopObserver)
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>> {
        let params = self.fitted()?;
        x.ensure_columns(params.weights.len())?;

        let predictions = (x.as_matrix() * &params.weights).add_scalar(params.bias);
        Ok(predictions.iter().copied().collect())
    }

    fn is_fitted(&self) -> bool {
        matches!(self.state, SolverState::Fitted(_))
    }

    fn weights(&self) -> Option<&[f64]> {
        self.fitted().ok().map(|p| p.weights.as_slice())
    }

    fn bias(&self) -> Option<f64> {
        self.fitted().ok().map(|p| p.bias)
    }

    fn name(&self) -> &str {
        "sgd_regressor"
    }
}

fn half_mse(data: &DMatrix<f64>, weights: &DVector<f64>, bias: f64, targets: &DVector<f64>) -> f64 {
    let residual = (data * weights).add_scalar(bias) - targets;
    residual.norm_squared() / (2.0 * data.nrows() as f64)
}
