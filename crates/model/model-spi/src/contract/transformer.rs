//! Feature transformer trait

use crate::error::Result;
use crate::model::FeatureMatrix;

/// Feature transformation with an optional learned state
///
/// Follows the fit-transform pattern: `fit` learns parameters from a
/// training matrix, `transform` applies them to any matrix with a compatible
/// shape. Stateless transformers treat `fit` as a no-op.
///
/// # Example
///
/// ```rust,ignore
/// use model_spi::{FeatureMatrix, Transformer};
///
/// fn prepare<T: Transformer>(step: &mut T, x: &FeatureMatrix) -> model_spi::Result<FeatureMatrix> {
///     step.fit_transform(x)
/// }
/// ```
pub trait Transformer {
    /// Learn transformation parameters from `x`
    fn fit(&mut self, x: &FeatureMatrix) -> Result<()>;

    /// Apply the learned transformation
    ///
    /// Returns [`ModelError::NotFitted`](crate::ModelError::NotFitted) when the
    /// transformer needs state that has not been learned yet.
    fn transform(&self, x: &FeatureMatrix) -> Result<FeatureMatrix>;

    /// Fit on `x`, then transform `x`
    fn fit_transform(&mut self, x: &FeatureMatrix) -> Result<FeatureMatrix> {
        self.fit(x)?;
        self.transform(x)
    }

    /// Check if `transform` can be called
    fn is_fitted(&self) -> bool;

    /// Name of this step
    fn name(&self) -> &str;
}
