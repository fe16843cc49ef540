//! Model Facade
//!
//! High-level API for fitting runtime curves to sorting benchmark timings.
//! Re-exports all public types from the model stack for convenient usage.

// Re-export everything from API (which includes SPI)
pub use model_api::*;

// Re-export core modules for direct access
pub use model_core::{linalg, metrics, pipeline, preprocessing, regression};

// Re-export stage types at root
pub use model_core::pipeline::{
    CurveSummary, FitPipeline, FittedCurve, MethodFailure, PipelineReport,
};
pub use model_core::preprocessing::{PolynomialFeatures, StandardScaler};
pub use model_core::regression::{LinearRegression, SgdRegressor};

pub use model_core::prelude;
