//! Model Consumer API
//!
//! Consumer-facing configuration and dataset records for the sortfit
//! modeling pipeline, plus re-exports of the SPI contracts.
//!
//! - [`config`]: [`SgdConfig`], [`PipelineConfig`], [`RegressorKind`]
//! - [`dataset`]: [`TimingRecord`], [`PredictionRecord`], [`Dataset`]

pub mod config;
pub mod dataset;

pub use config::{PipelineConfig, RegressorKind, SgdConfig};
pub use dataset::{CurvePoint, Dataset, MethodSeries, PredictionRecord, TimingRecord};

// Re-export all SPI types
pub use model_spi::{
    CancellationToken, FeatureMatrix, FitObserver, FitStatus, IterationEvent, ModelError,
    NoopObserver, Regressor, Result, Transformer,
};
