//! Error types for model operations
//!
//! This module provides the [`ModelError`] enum and [`Result`] type alias
//! for standardized error handling across all pipeline stages.

mod model_error;

pub use model_error::{ModelError, Result};
