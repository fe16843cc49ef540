//! Per-method curve fitting pipeline
//!
//! For every sorting method in a [`Dataset`] the pipeline runs
//! input size → [`PolynomialFeatures`] → [`StandardScaler`] → regressor and
//! predicts back on the same inputs to obtain a smoothed display curve.
//! Each method gets fresh stage instances and is fitted independently; a
//! method that fails is recorded in the report without stopping the others.

use crate::metrics::{r_squared, rmse};
use crate::preprocessing::{PolynomialFeatures, StandardScaler};
use crate::regression::{LinearRegression, SgdRegressor};
use model_api::{
    CancellationToken, Dataset, FeatureMatrix, FitStatus, MethodSeries, ModelError,
    PipelineConfig, PredictionRecord, Regressor, RegressorKind, Result, Transformer,
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Composes expansion, scaling and regression for each method
///
/// # Example
///
/// ```rust
/// use model_core::prelude::*;
///
/// let dataset: Dataset = (1..=10)
///     .map(|n| TimingRecord::new("Merge Sort", n * 100, (n * 100) as f64 * 0.01))
///     .collect();
///
/// let pipeline = FitPipeline::new(PipelineConfig::new(1, RegressorKind::Linear)).unwrap();
/// let report = pipeline.fit(&dataset).unwrap();
/// assert!(report.failures().is_empty());
/// assert!(report.curves()[0].r_squared() > 0.999);
/// ```
#[derive(Debug, Clone)]
pub struct FitPipeline {
    config: PipelineConfig,
    cancellation: Option<CancellationToken>,
}

impl FitPipeline {
    /// Create a pipeline after validating `config`
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cancellation: None,
        })
    }

    /// Stop between methods and inside iterative fits once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Fit every selected method of `dataset`
    ///
    /// Per-method errors are collected in [`PipelineReport::failures`]; the
    /// only error returned here is [`ModelError::Cancelled`].
    pub fn fit(&self, dataset: &Dataset) -> Result<PipelineReport> {
        let mut report = PipelineReport::default();

        for series in dataset.series() {
            if !self.config.includes(&series.method) {
                continue;
            }
            if self.is_cancelled() {
                return Err(ModelError::Cancelled);
            }

            match self.fit_series(&series) {
                Ok(curve) => {
                    info!(
                        method = %curve.method,
                        samples = curve.len(),
                        r_squared = curve.r_squared,
                        converged = curve.status.is_converged(),
                        "fitted curve"
                    );
                    if !curve.status.is_converged() {
                        warn!(
                            method = %curve.method,
                            iterations = curve.status.iterations(),
                            "regressor stopped before reaching tolerance"
                        );
                    }
                    report.curves.push(curve);
                }
                Err(ModelError::Cancelled) => return Err(ModelError::Cancelled),
                Err(error) => {
                    warn!(method = %series.method, %error, "skipping method");
                    report.failures.push(MethodFailure {
                        method: series.method,
                        error,
                    });
                }
            }
        }

        Ok(report)
    }

    /// Fit then return only the concatenated prediction series
    pub fn fit_predict(&self, dataset: &Dataset) -> Result<Vec<PredictionRecord>> {
        Ok(self.fit(dataset)?.predictions())
    }

    /// Fit a single method's rows
    pub fn fit_series(&self, series: &MethodSeries) -> Result<FittedCurve> {
        if series.len() < 2 {
            warn!(
                method = %series.method,
                samples = series.len(),
                "too few samples for a meaningful variance; fitting anyway"
            );
        }

        let raw = FeatureMatrix::from_column(&series.features())?;
        let expander = PolynomialFeatures::new(self.config.degree)?;
        let mut scaler = StandardScaler::new();
        let features = scaler.fit_transform(&expander.transform(&raw)?)?;

        let mut regressor = self.build_regressor()?;
        let status = regressor.fit(&features, &series.execution_times)?;
        let fitted = regressor.predict(&features)?;

        debug!(
            method = %series.method,
            regressor = regressor.name(),
            features = features.ncols(),
            "method fitted"
        );

        Ok(FittedCurve {
            method: series.method.clone(),
            r_squared: r_squared(&series.execution_times, &fitted),
            rmse: rmse(&series.execution_times, &fitted),
            input_sizes: series.input_sizes.clone(),
            observed: series.execution_times.clone(),
            fitted,
            status,
            expander,
            scaler,
            regressor,
        })
    }

    fn build_regressor(&self) -> Result<Box<dyn Regressor>> {
        match self.config.regressor {
            RegressorKind::Linear => Ok(Box::new(LinearRegression::new())),
            RegressorKind::Sgd => {
                let mut model = SgdRegressor::new(self.config.sgd.clone())?;
                if let Some(token) = &self.cancellation {
                    model = model.with_cancellation(token.clone());
                }
                Ok(Box::new(model))
            }
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

/// Fitted stages and in-sample results for one method
pub struct FittedCurve {
    method: String,
    input_sizes: Vec<u64>,
    observed: Vec<f64>,
    fitted: Vec<f64>,
    status: FitStatus,
    r_squared: f64,
    rmse: f64,
    expander: PolynomialFeatures,
    scaler: StandardScaler,
    regressor: Box<dyn Regressor>,
}

impl FittedCurve {
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn len(&self) -> usize {
        self.input_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input_sizes.is_empty()
    }

    pub fn input_sizes(&self) -> &[u64] {
        &self.input_sizes
    }

    pub fn observed(&self) -> &[f64] {
        &self.observed
    }

    /// In-sample predictions, aligned with [`input_sizes`](Self::input_sizes)
    pub fn fitted_values(&self) -> &[f64] {
        &self.fitted
    }

    pub fn status(&self) -> FitStatus {
        self.status
    }

    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    pub fn rmse(&self) -> f64 {
        self.rmse
    }

    pub fn regressor(&self) -> &dyn Regressor {
        self.regressor.as_ref()
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Evaluate the curve at arbitrary input sizes
    pub fn predict(&self, input_sizes: &[f64]) -> Result<Vec<f64>> {
        let raw = FeatureMatrix::from_column(input_sizes)?;
        let features = self.scaler.transform(&self.expander.transform(&raw)?)?;
        self.regressor.predict(&features)
    }

    /// Evaluate the curve at `points` evenly spaced sizes spanning the
    /// observed input range
    pub fn sample(&self, points: usize) -> Result<Vec<(f64, f64)>> {
        if points < 2 {
            return Err(ModelError::InvalidParameter {
                name: "points".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }

        let (low, high) = self
            .input_sizes
            .iter()
            .fold((u64::MAX, u64::MIN), |(lo, hi), &n| (lo.min(n), hi.max(n)));
        let step = (high as f64 - low as f64) / (points - 1) as f64;
        let grid: Vec<f64> = (0..points).map(|i| low as f64 + step * i as f64).collect();

        let values = self.predict(&grid)?;
        Ok(grid.into_iter().zip(values).collect())
    }

    /// In-sample prediction records in dataset order
    pub fn predictions(&self) -> Vec<PredictionRecord> {
        self.input_sizes
            .iter()
            .zip(self.fitted.iter())
            .map(|(&input_size, &predicted)| PredictionRecord {
                method: self.method.clone(),
                input_size,
                predicted_execution_time: predicted,
            })
            .collect()
    }

    pub fn summary(&self) -> CurveSummary {
        CurveSummary {
            method: self.method.clone(),
            samples: self.len(),
            regressor: self.regressor.name().to_string(),
            status: self.status,
            r_squared: self.r_squared,
            rmse: self.rmse,
            weights: self.regressor.weights().map(<[f64]>::to_vec).unwrap_or_default(),
            bias: self.regressor.bias().unwrap_or_default(),
        }
    }
}

impl std::fmt::Debug for FittedCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FittedCurve")
            .field("method", &self.method)
            .field("samples", &self.len())
            .field("regressor", &self.regressor.name())
            .field("status", &self.status)
            .field("r_squared", &self.r_squared)
            .finish()
    }
}

/// Serializable digest of a [`FittedCurve`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSummary {
    pub method: String,
    pub samples: usize,
    pub regressor: String,
    pub status: FitStatus,
    pub r_squared: f64,
    pub rmse: f64,
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// A method whose fit failed
#[derive(Debug, Clone, PartialEq)]
pub struct MethodFailure {
    pub method: String,
    pub error: ModelError,
}

/// Result of [`FitPipeline::fit`]
#[derive(Debug, Default)]
pub struct PipelineReport {
    curves: Vec<FittedCurve>,
    failures: Vec<MethodFailure>,
}

impl PipelineReport {
    /// Successfully fitted methods in first-seen order
    pub fn curves(&self) -> &[FittedCurve] {
        &self.curves
    }

    pub fn failures(&self) -> &[MethodFailure] {
        &self.failures
    }

    pub fn curve(&self, method: &str) -> Option<&FittedCurve> {
        self.curves.iter().find(|c| c.method == method)
    }

    /// All in-sample predictions, grouped by method in first-seen order
    pub fn predictions(&self) -> Vec<PredictionRecord> {
        self.curves.iter().flat_map(FittedCurve::predictions).collect()
    }

    pub fn summaries(&self) -> Vec<CurveSummary> {
        self.curves.iter().map(FittedCurve::summary).collect()
    }
}
