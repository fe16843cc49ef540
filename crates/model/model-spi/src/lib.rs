//! Model Service Provider Interface
//!
//! Defines the contracts, shared data types and error type for the
//! sortfit modeling pipeline.
//!
//! This crate provides the foundational abstractions that every pipeline
//! stage adheres to:
//!
//! - [`Transformer`]: feature transformations learned from data (scaling, expansion)
//! - [`Regressor`]: models fitted on a feature matrix and a target vector
//! - [`FitObserver`]: per-iteration progress hook for iterative solvers
//! - [`FeatureMatrix`]: the non-empty samples × features matrix passed between stages
//! - [`ModelError`]: standardized error type for all model operations
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{FitObserver, IterationEvent, NoopObserver, Regressor, Transformer};
pub use error::{ModelError, Result};
pub use model::{CancellationToken, FeatureMatrix, FitStatus};
