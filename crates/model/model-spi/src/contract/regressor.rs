//! Regressor trait

use crate::error::Result;
use crate::model::{FeatureMatrix, FitStatus};

/// Common trait for all regressors
///
/// A regressor owns exactly one fitted parameter set at a time. Refitting
/// computes the new parameters first and replaces the old ones only when the
/// fit succeeds, so `predict` never sees a partially updated model.
///
/// # Example
///
/// ```rust,ignore
/// use model_spi::{FeatureMatrix, Regressor};
///
/// fn smooth<R: Regressor>(model: &mut R, x: &FeatureMatrix, y: &[f64]) -> model_spi::Result<Vec<f64>> {
///     model.fit(x, y)?;
///     model.predict(x)
/// }
/// ```
pub trait Regressor: Send {
    /// Fit the model to features `x` (samples × features) and targets `y`
    ///
    /// # Returns
    ///
    /// The [`FitStatus`] describing how the fit finished, or an error if
    /// the inputs are inconsistent or the fit cannot produce usable weights.
    fn fit(&mut self, x: &FeatureMatrix, y: &[f64]) -> Result<FitStatus>;

    /// Predict one value per row of `x`
    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;

    /// Fitted feature weights, `None` before fit
    fn weights(&self) -> Option<&[f64]>;

    /// Fitted intercept, `None` before fit
    fn bias(&self) -> Option<f64>;

    /// Short identifier used in logs and reports
    fn name(&self) -> &str;
}
