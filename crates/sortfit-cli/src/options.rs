//! Model flags shared by every subcommand

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use model_facade::{PipelineConfig, RegressorKind};

use crate::io;

/// Flags override the JSON config file, which overrides the defaults
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// JSON file holding a serialized pipeline configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Polynomial degree
    #[arg(short, long)]
    pub degree: Option<usize>,

    /// Regressor (sgd, linear)
    #[arg(long)]
    pub regressor: Option<RegressorKind>,

    /// Gradient descent step size
    #[arg(long)]
    pub learning_rate: Option<f64>,

    /// Gradient descent iteration budget
    #[arg(long)]
    pub max_iterations: Option<usize>,

    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Stop once the cost drops below this
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Only fit these methods (repeatable)
    #[arg(short, long = "method")]
    pub methods: Vec<String>,
}

impl ModelArgs {
    pub fn resolve(&self) -> Result<PipelineConfig> {
        let base = match &self.config {
            Some(path) => io::load_config(path)?,
            None => PipelineConfig::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, mut config: PipelineConfig) -> PipelineConfig {
        if let Some(degree) = self.degree {
            config.degree = degree;
        }
        if let Some(regressor) = self.regressor {
            config.regressor = regressor;
        }
        if let Some(learning_rate) = self.learning_rate {
            config.sgd.learning_rate = learning_rate;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.sgd.max_iterations = max_iterations;
        }
        if let Some(batch_size) = self.batch_size {
            config.sgd.batch_size = batch_size;
        }
        if let Some(tolerance) = self.tolerance {
            config.sgd.tolerance = tolerance;
        }
        if !self.methods.is_empty() {
            config.methods = self.methods.clone();
        }
        config
    }
}
