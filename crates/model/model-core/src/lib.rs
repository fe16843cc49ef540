//! Curve fitting for sorting benchmark timings
//!
//! This crate implements the numeric modeling pipeline, organized by stage:
//!
//! - [`preprocessing`]: polynomial feature expansion, standardization
//! - [`regression`]: closed-form least squares, batch gradient descent
//! - [`pipeline`]: per-method expand → scale → fit → predict orchestration
//! - [`metrics`]: fit quality measures
//!
//! ## Example
//!
//! ```rust
//! use model_core::prelude::*;
//!
//! let dataset: Dataset = vec![
//!     TimingRecord::new("Bubble Sort", 10, 5.0),
//!     TimingRecord::new("Bubble Sort", 20, 20.0),
//!     TimingRecord::new("Bubble Sort", 30, 45.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let pipeline = FitPipeline::new(PipelineConfig::new(2, RegressorKind::Linear)).unwrap();
//! let report = pipeline.fit(&dataset).unwrap();
//! assert_eq!(report.predictions().len(), 3);
//! ```

pub mod linalg;
pub mod metrics;
pub mod pipeline;
pub mod preprocessing;
pub mod regression;

pub use model_api::{ModelError, Result};

// Re-export for convenience
pub use pipeline::{CurveSummary, FitPipeline, FittedCurve, MethodFailure, PipelineReport};
pub use preprocessing::{PolynomialFeatures, StandardScaler};
pub use regression::{LinearRegression, SgdRegressor};

/// Prelude module for convenient imports
pub mod prelude {
    // Contracts
    pub use model_api::{
        CancellationToken, FeatureMatrix, FitObserver, FitStatus, IterationEvent, Regressor,
        Transformer,
    };
    // Configuration and records
    pub use model_api::{
        Dataset, PipelineConfig, PredictionRecord, RegressorKind, SgdConfig, TimingRecord,
    };
    // Stages
    pub use crate::pipeline::{FitPipeline, FittedCurve, PipelineReport};
    pub use crate::preprocessing::{PolynomialFeatures, StandardScaler};
    pub use crate::regression::{LinearRegression, SgdRegressor};
    pub use crate::{ModelError, Result};
}
