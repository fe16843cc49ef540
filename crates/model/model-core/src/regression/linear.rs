//! Closed-form linear regression
//!
//! Solves ordinary least squares exactly through the normal equations.
//!
//! ## When to Use
//!
//! - Small datasets where an exact answer is cheap
//! - Reference solution for checking the iterative solver
//! - Collinear or near-singular designs (handled by the pseudo-inverse)

use crate::linalg::{pseudo_inverse, with_bias_column};
use model_api::{FeatureMatrix, FitStatus, ModelError, Regressor, Result};
use nalgebra::DVector;
use tracing::debug;

/// Ordinary least squares with an intercept
///
/// Fits `y = b + X·w` by prepending a ones column to `X` and computing
/// `pinv(XᵀX)·Xᵀ·y`.
///
/// # Example
///
/// ```rust
/// use model_core::regression::LinearRegression;
/// use model_api::{FeatureMatrix, Regressor};
///
/// let x = FeatureMatrix::from_column(&[1.0, 2.0, 3.0]).unwrap();
/// let y = vec![5.0, 7.0, 9.0];
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
/// assert!((model.bias().unwrap() - 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearRegression {
    /// Intercept followed by one weight per feature
    coefficients: Option<Vec<f64>>,
}

impl LinearRegression {
    /// Create a new, unfitted model
    pub fn new() -> Self {
        Self::default()
    }

    /// Intercept followed by the feature weights
    pub fn coefficients(&self) -> Option<&[f64]> {
        self.coefficients.as_deref()
    }
}

impl Regressor for LinearRegression {
    fn fit(&mut self, x: &FeatureMatrix, y: &[f64]) -> Result<FitStatus> {
        x.ensure_targets(y)?;

        let design = with_bias_column(x.as_matrix());
        let gram = design.tr_mul(&design);
        let moments = design.tr_mul(&DVector::from_column_slice(y));
        let solution = pseudo_inverse(gram)? * moments;

        if solution.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::NumericalError(
                "least-squares solution is not finite".to_string(),
            ));
        }

        debug!(
            samples = x.nrows(),
            features = x.ncols(),
            "closed-form least squares solved"
        );

        self.coefficients = Some(solution.iter().copied().collect());
        Ok(FitStatus::Solved)
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>> {
        let coefficients = self.coefficients.as_ref().ok_or(ModelError::NotFitted)?;
        x.ensure_columns(coefficients.len() - 1)?;

        let design = with_bias_column(x.as_matrix());
        let predictions = design * DVector::from_column_slice(coefficients);
        Ok(predictions.iter().copied().collect())
    }

    fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    fn weights(&self) -> Option<&[f64]> {
        self.coefficients.as_deref().map(|c| &c[1..])
    }

    fn bias(&self) -> Option<f64> {
        self.coefficients.as_ref().map(|c| c[0])
    }

    fn name(&self) -> &str {
        "linear_regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_data() -> (FeatureMatrix, Vec<f64>) {
        let xs: Vec<f64> = (1..=8).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x + 3.0).collect();
        (FeatureMatrix::from_column(&xs).unwrap(), ys)
    }

    #[test]
    fn test_recovers_exact_line() {
        let (x, y) = linear_data();
        let mut model = LinearRegression::new();

        let status = model.fit(&x, &y).unwrap();

        assert_eq!(status, FitStatus::Solved);
        let coefficients = model.coefficients().unwrap();
        assert!((coefficients[0] - 3.0).abs() < 1e-6);
        assert!((coefficients[1] - 2.0).abs() < 1e-6);
        assert_eq!(model.weights().unwrap().len(), 1);
    }

    #[test]
    fn test_predict_in_sample() {
        let (x, y) = linear_data();
        let mut model = LinearRegression::new();
        model.fit(&x, &y).unwrap();

        let predictions = model.predict(&x).unwrap();

        for (p, t) in predictions.iter().zip(y.iter()) {
            assert!((p - t).abs() < 1e-6);
        }
    }

    #[test]
    fn test_collinear_columns_minimum_norm() {
        let rows: Vec<Vec<f64>> = (1..=5).map(|i| vec![i as f64, i as f64]).collect();
        let x = FeatureMatrix::from_rows(&rows).unwrap();
        let y: Vec<f64> = (1..=5).map(|i| 2.0 * i as f64 + 3.0).collect();

        let mut model = LinearRegression::new();
        model.fit(&x, &y).unwrap();

        let weights = model.weights().unwrap();
        assert!(weights.iter().all(|w| w.is_finite()));
        assert!((weights[0] + weights[1] - 2.0).abs() < 1e-6);
        assert!((model.bias().unwrap() - 3.0).abs() < 1e-6);

        let predictions = model.predict(&x).unwrap();
        for (p, t) in predictions.iter().zip(y.iter()) {
            assert!((p - t).abs() < 1e-6);
        }
    }

    #[test]
    fn test_single_sample() {
        let x = FeatureMatrix::from_column(&[4.0]).unwrap();
        let mut model = LinearRegression::new();
        model.fit(&x, &[10.0]).unwrap();

        let prediction = model.predict(&x).unwrap();
        assert!((prediction[0] - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_predict_before_fit() {
        let x = FeatureMatrix::from_column(&[1.0]).unwrap();
        let model = LinearRegression::new();
        assert_eq!(model.predict(&x), Err(ModelError::NotFitted));
        assert_eq!(model.weights(), None);
        assert_eq!(model.bias(), None);
    }

    #[test]
    fn test_target_length_mismatch() {
        let x = FeatureMatrix::from_column(&[1.0, 2.0, 3.0]).unwrap();
        let mut model = LinearRegression::new();
        assert_eq!(
            model.fit(&x, &[1.0, 2.0]),
            Err(ModelError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_predict_feature_mismatch() {
        let (x, y) = linear_data();
        let mut model = LinearRegression::new();
        model.fit(&x, &y).unwrap();

        let wide = FeatureMatrix::from_rows(&[vec![1.0, 2.0]]).unwrap();
        assert_eq!(
            model.predict(&wide),
            Err(ModelError::DimensionMismatch {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_failed_refit_keeps_previous_model() {
        let (x, y) = linear_data();
        let mut model = LinearRegression::new();
        model.fit(&x, &y).unwrap();
        let before = model.clone();

        assert!(model.fit(&x, &y[..3]).is_err());
        assert_eq!(model, before);
    }
}
