//! Dense linear algebra helpers on top of nalgebra.
//!
//! ## Design notes
//!
//! * Normal equations are solved through an SVD-based Moore–Penrose
//!   pseudo-inverse, so collinear polynomial columns still produce the
//!   finite minimum-norm solution instead of an inversion failure.
//! * Singular values at or below `PINV_RCOND · σ_max` are treated as zero.

use model_api::{ModelError, Result};
use nalgebra::DMatrix;

/// Relative singular-value cutoff for [`pseudo_inverse`].
pub const PINV_RCOND: f64 = 1e-15;

/// Moore–Penrose pseudo-inverse of `matrix`.
pub fn pseudo_inverse(matrix: DMatrix<f64>) -> Result<DMatrix<f64>> {
    if matrix.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::NumericalError(
            "matrix contains non-finite values".to_string(),
        ));
    }

    let svd = matrix.svd(true, true);
    let cutoff = svd.singular_values.max() * PINV_RCOND;
    svd.pseudo_inverse(cutoff)
        .map_err(|reason| ModelError::NumericalError(reason.to_string()))
}

/// Copy of `x` with a leading column of ones (the intercept term).
pub fn with_bias_column(x: &DMatrix<f64>) -> DMatrix<f64> {
    x.clone().insert_column(0, 1.0)
}
