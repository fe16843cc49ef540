//! Model error types
//!
//! Defines the standardized error type for transformers and regressors.

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while fitting or applying a model
///
/// Iterative solvers that run out of iterations do not produce an error:
/// that outcome is reported as [`FitStatus::NonConvergence`](crate::FitStatus).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Operation requires a prior call to `fit`
    #[error("Model must be fitted before use")]
    NotFitted,

    /// Feature or target shape inconsistent with the input or fitted state
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Zero-row input to fit, predict or transform
    #[error("Input contains no samples")]
    EmptyInput,

    /// Polynomial degree below 1
    #[error("Invalid polynomial degree {degree}: must be at least 1")]
    InvalidDegree { degree: usize },

    /// Invalid configuration value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Numerical failure (divergence, non-finite values)
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Fit interrupted through a cancellation token
    #[error("Fit was cancelled")]
    Cancelled,
}
