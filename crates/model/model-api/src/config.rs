//! Model configuration types.

use model_spi::{ModelError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Gradient Descent Configuration
// ============================================================================

/// Gradient-descent regressor configuration.
///
/// `batch_size` is carried for compatibility but the solver always computes
/// the full-batch gradient; it has no effect on the update rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgdConfig {
    /// Step size applied to each gradient update.
    pub learning_rate: f64,
    /// Iteration budget.
    pub max_iterations: usize,
    /// Nominal batch size (inert, see type docs).
    pub batch_size: usize,
    /// Stop once the cost falls below this value.
    pub tolerance: f64,
}

impl SgdConfig {
    pub fn new(learning_rate: f64, max_iterations: usize) -> Self {
        Self {
            learning_rate,
            max_iterations,
            ..Self::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Check every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(invalid("learning_rate", "must be a positive finite number"));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations", "must be at least 1"));
        }
        if self.batch_size == 0 {
            return Err(invalid("batch_size", "must be at least 1"));
        }
        if !(self.tolerance >= 0.0) {
            return Err(invalid("tolerance", "must be non-negative"));
        }
        Ok(())
    }
}

impl Default for SgdConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_iterations: 1000,
            batch_size: 20,
            tolerance: 1e-3,
        }
    }
}

// ============================================================================
// Pipeline Configuration
// ============================================================================

/// Which regressor the pipeline fits for each method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressorKind {
    /// Batch gradient descent.
    #[default]
    Sgd,
    /// Closed-form least squares.
    Linear,
}

impl std::str::FromStr for RegressorKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sgd" | "gradient" => Ok(RegressorKind::Sgd),
            "linear" | "ols" | "closed-form" => Ok(RegressorKind::Linear),
            other => Err(invalid(
                "regressor",
                &format!("unknown regressor '{}', expected 'sgd' or 'linear'", other),
            )),
        }
    }
}

/// Per-method curve fitting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Polynomial degree applied to the input size.
    pub degree: usize,
    /// Regressor fitted on the scaled features.
    pub regressor: RegressorKind,
    /// Gradient-descent settings, used when `regressor` is `Sgd`.
    pub sgd: SgdConfig,
    /// Methods to fit; empty means every method in the dataset.
    pub methods: Vec<String>,
}

impl PipelineConfig {
    pub fn new(degree: usize, regressor: RegressorKind) -> Self {
        Self {
            degree,
            regressor,
            ..Self::default()
        }
    }

    pub fn with_sgd(mut self, sgd: SgdConfig) -> Self {
        self.sgd = sgd;
        self
    }

    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `method` passes the method filter.
    pub fn includes(&self, method: &str) -> bool {
        self.methods.is_empty() || self.methods.iter().any(|m| m == method)
    }

    pub fn validate(&self) -> Result<()> {
        if self.degree == 0 {
            return Err(ModelError::InvalidDegree {
                degree: self.degree,
            });
        }
        if self.regressor == RegressorKind::Sgd {
            self.sgd.validate()?;
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            degree: 2,
            regressor: RegressorKind::Sgd,
            sgd: SgdConfig {
                max_iterations: 10_000,
                ..SgdConfig::default()
            },
            methods: Vec::new(),
        }
    }
}

fn invalid(name: &str, reason: &str) -> ModelError {
    ModelError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
