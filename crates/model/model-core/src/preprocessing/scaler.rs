//! Standard scaler
//!
//! Rescales every feature to zero mean and unit variance, which keeps the
//! gradient-descent solver stable when polynomial columns differ by orders
//! of magnitude.

use model_api::{FeatureMatrix, ModelError, Result, Transformer};
use nalgebra::DMatrix;

/// Added to every scale before dividing, so constant columns map to zero
/// instead of dividing by zero.
pub const SCALE_EPSILON: f64 = 1e-8;

#[derive(Debug, Clone, PartialEq)]
struct ScalerState {
    means: Vec<f64>,
    scales: Vec<f64>,
}

/// Per-feature z-score standardization
///
/// `fit` learns the column means and population standard deviations;
/// `transform` computes `(x - mean) / (scale + ε)` with `ε = 1e-8`.
///
/// # Example
///
/// ```rust
/// use model_core::preprocessing::StandardScaler;
/// use model_api::FeatureMatrix;
///
/// let x = FeatureMatrix::from_column(&[1.0, 2.0, 3.0]).unwrap();
/// let mut scaler = StandardScaler::new();
/// let scaled = scaler.fit(&x).unwrap().transform(&x).unwrap();
/// assert!(scaled.column(0)[1].abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardScaler {
    state: Option<ScalerState>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn column means and standard deviations, returning `self` for chaining
    pub fn fit(&mut self, x: &FeatureMatrix) -> Result<&mut Self> {
        let data = x.as_matrix();
        let n = x.nrows() as f64;

        let mut means = Vec::with_capacity(x.ncols());
        let mut scales = Vec::with_capacity(x.ncols());
        for column in data.column_iter() {
            let mean = column.sum() / n;
            let variance = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            means.push(mean);
            scales.push(variance.sqrt());
        }

        self.state = Some(ScalerState { means, scales });
        Ok(self)
    }

    /// Standardize `x` with the learned parameters
    pub fn transform(&self, x: &FeatureMatrix) -> Result<FeatureMatrix> {
        let state = self.fitted_state(x)?;
        let data = x.as_matrix();

        let scaled = DMatrix::from_fn(x.nrows(), x.ncols(), |row, col| {
            (data[(row, col)] - state.means[col]) / (state.scales[col] + SCALE_EPSILON)
        });
        FeatureMatrix::from_matrix(scaled)
    }

    /// Equivalent to `fit(x)` followed by `transform(x)`
    pub fn fit_transform(&mut self, x: &FeatureMatrix) -> Result<FeatureMatrix> {
        self.fit(x)?.transform(x)
    }

    /// Map standardized values back to the original feature scale
    pub fn inverse_transform(&self, x: &FeatureMatrix) -> Result<FeatureMatrix> {
        let state = self.fitted_state(x)?;
        let data = x.as_matrix();

        let restored = DMatrix::from_fn(x.nrows(), x.ncols(), |row, col| {
            data[(row, col)] * (state.scales[col] + SCALE_EPSILON) + state.means[col]
        });
        FeatureMatrix::from_matrix(restored)
    }

    /// Learned per-feature means
    pub fn feature_means(&self) -> Option<&[f64]> {
        self.state.as_ref().map(|s| s.means.as_slice())
    }

    /// Learned per-feature population standard deviations
    pub fn feature_scales(&self) -> Option<&[f64]> {
        self.state.as_ref().map(|s| s.scales.as_slice())
    }

    fn fitted_state(&self, x: &FeatureMatrix) -> Result<&ScalerState> {
        let state = self.state.as_ref().ok_or(ModelError::NotFitted)?;
        x.ensure_columns(state.means.len())?;
        Ok(state)
    }
}

impl Transformer for StandardScaler {
    fn fit(&mut self, x: &FeatureMatrix) -> Result<()> {
        StandardScaler::fit(self, x).map(|_| ())
    }

    fn transform(&self, x: &FeatureMatrix) -> Result<FeatureMatrix> {
        StandardScaler::transform(self, x)
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    fn name(&self) -> &str {
        "standard_scaler"
    }
}
