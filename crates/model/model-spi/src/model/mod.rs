//! Shared data types passed between pipeline stages

mod cancellation;
mod feature_matrix;
mod fit_status;

pub use cancellation::CancellationToken;
pub use feature_matrix::FeatureMatrix;
pub use fit_status::FitStatus;
