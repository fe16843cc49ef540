//! Polynomial feature expansion
//!
//! Lets a linear model fit curves such as the quadratic growth of simple
//! sorting algorithms by adding successive powers of each input feature.

use model_api::{FeatureMatrix, ModelError, Result, Transformer};
use nalgebra::DMatrix;

/// Expands features into `[X, X², …, X^degree]`
///
/// Powers are stacked block by block: for an input with `n` columns the
/// output has `n · degree` columns, and output column `k·n + j` holds input
/// column `j` raised to `k + 1`. With a single input column, column `k` is
/// simply `X^(k+1)`.
///
/// # Example
///
/// ```rust
/// use model_core::preprocessing::PolynomialFeatures;
/// use model_api::FeatureMatrix;
///
/// let poly = PolynomialFeatures::new(3).unwrap();
/// let x = FeatureMatrix::from_column(&[2.0]).unwrap();
/// let expanded = poly.expand(&x).unwrap();
/// assert_eq!(expanded.row(0), vec![2.0, 4.0, 8.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialFeatures {
    degree: usize,
}

impl PolynomialFeatures {
    /// Create an expander
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidDegree`] when `degree` is 0.
    pub fn new(degree: usize) -> Result<Self> {
        if degree < 1 {
            return Err(ModelError::InvalidDegree { degree });
        }
        Ok(Self { degree })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of output columns for `input_features` input columns
    pub fn output_features(&self, input_features: usize) -> usize {
        input_features * self.degree
    }

    /// Apply the expansion
    pub fn expand(&self, x: &FeatureMatrix) -> Result<FeatureMatrix> {
        let source = x.as_matrix();
        let width = x.ncols();

        let expanded = DMatrix::from_fn(x.nrows(), self.output_features(width), |row, col| {
            let power = (col / width + 1) as i32;
            source[(row, col % width)].powi(power)
        });

        FeatureMatrix::from_matrix(expanded)
    }
}

impl Default for PolynomialFeatures {
    fn default() -> Self {
        Self { degree: 2 }
    }
}

impl Transformer for PolynomialFeatures {
    fn fit(&mut self, _x: &FeatureMatrix) -> Result<()> {
        Ok(())
    }

    fn transform(&self, x: &FeatureMatrix) -> Result<FeatureMatrix> {
        self.expand(x)
    }

    fn is_fitted(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "polynomial_features"
    }
}
