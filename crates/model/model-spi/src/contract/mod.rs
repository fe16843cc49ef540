//! Contract traits for pipeline stages
//!
//! - [`Transformer`]: learned feature transformations
//! - [`Regressor`]: fit/predict models
//! - [`FitObserver`]: progress hook for iterative fits

mod observer;
mod regressor;
mod transformer;

pub use observer::{FitObserver, IterationEvent, NoopObserver};
pub use regressor::Regressor;
pub use transformer::Transformer;
