//! Regression models
//!
//! - [`LinearRegression`]: closed-form least squares via pseudo-inverse
//! - [`SgdRegressor`]: batch gradient descent with early stopping

mod linear;
mod sgd;

pub use linear::LinearRegression;
pub use sgd::SgdRegressor;
