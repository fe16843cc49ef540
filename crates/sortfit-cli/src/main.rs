//! # sortfit
//!
//! Command-line interface for fitting runtime curves to sorting benchmark
//! timings.

mod io;
mod options;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use model_facade::{CurvePoint, FitPipeline, PipelineReport};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::options::ModelArgs;

#[derive(Parser)]
#[command(name = "sortfit")]
#[command(about = "Fit smooth runtime curves to sorting benchmark timings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit each method and write in-sample predictions
    Fit {
        /// Timing CSV with Sorting Method, Input Size, Execution Time columns
        #[arg(short, long)]
        input: PathBuf,

        /// Prediction CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Per-method fit report as JSON
        #[arg(short, long)]
        report: Option<PathBuf>,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Sample each fitted curve on an even grid of input sizes
    Curve {
        /// Timing CSV with Sorting Method, Input Size, Execution Time columns
        #[arg(short, long)]
        input: PathBuf,

        /// Curve CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Points per method
        #[arg(short, long, default_value = "100")]
        points: usize,

        #[command(flatten)]
        model: ModelArgs,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sortfit=info,model_core=info".into()),
        )
        .init();
}

fn fit_dataset(input: &Path, model: &ModelArgs) -> Result<PipelineReport> {
    let config = model.resolve()?;
    let dataset = io::load_dataset(input)?;
    info!(
        rows = dataset.len(),
        methods = dataset.methods().len(),
        degree = config.degree,
        regressor = ?config.regressor,
        "loaded timings"
    );

    let pipeline = FitPipeline::new(config).context("Invalid model configuration")?;
    let report = pipeline.fit(&dataset)?;

    for failure in report.failures() {
        eprintln!("Skipped {}: {}", failure.method, failure.error);
    }
    Ok(report)
}

fn run_fit(
    input: PathBuf,
    output: Option<PathBuf>,
    report_path: Option<PathBuf>,
    model: ModelArgs,
) -> Result<()> {
    let report = fit_dataset(&input, &model)?;

    let predictions = report.predictions();
    io::with_output(output.as_deref(), |w| io::write_predictions(w, &predictions))?;

    if let Some(path) = report_path {
        let json = serde_json::json!({
            "methods": report.summaries(),
            "failures": report
                .failures()
                .iter()
                .map(|f| serde_json::json!({ "method": f.method, "error": f.error.to_string() }))
                .collect::<Vec<_>>(),
        });
        let file = std::fs::File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &json).context("Failed to write report")?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

fn run_curve(input: PathBuf, output: Option<PathBuf>, points: usize, model: ModelArgs) -> Result<()> {
    let report = fit_dataset(&input, &model)?;

    let mut rows = Vec::new();
    for curve in report.curves() {
        for (input_size, execution_time) in curve.sample(points)? {
            rows.push(CurvePoint {
                method: curve.method().to_string(),
                input_size,
                execution_time,
            });
        }
    }

    io::with_output(output.as_deref(), |w| io::write_curve(w, &rows))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fit {
            input,
            output,
            report,
            model,
        } => run_fit(input, output, report, model),

        Commands::Curve {
            input,
            output,
            points,
            model,
        } => run_curve(input, output, points, model),
    }
}
