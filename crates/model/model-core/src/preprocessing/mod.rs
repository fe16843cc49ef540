//! Feature preprocessing stages
//!
//! - [`PolynomialFeatures`]: stateless power expansion
//! - [`StandardScaler`]: learned zero-mean, unit-variance scaling

mod polynomial;
mod scaler;

pub use polynomial::PolynomialFeatures;
pub use scaler::{StandardScaler, SCALE_EPSILON};
