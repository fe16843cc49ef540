//! CSV and JSON file handling for the command line

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use model_facade::{CurvePoint, Dataset, PipelineConfig, PredictionRecord, TimingRecord};
use serde::Serialize;

/// Parse timing rows from any reader
///
/// Expects the `Sorting Method`, `Input Size` and `Execution Time` columns;
/// extra columns are ignored.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut dataset = Dataset::default();
    for (line, row) in reader.deserialize::<TimingRecord>().enumerate() {
        // header is line 1
        let record = row.with_context(|| format!("Invalid timing row at line {}", line + 2))?;
        dataset.push(record);
    }
    Ok(dataset)
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let dataset = read_dataset(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if dataset.is_empty() {
        bail!("No timing rows found in {}", path.display());
    }
    Ok(dataset)
}

pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

pub fn write_predictions<W: Write>(writer: W, rows: &[PredictionRecord]) -> Result<()> {
    write_rows(writer, rows)
}

pub fn write_curve<W: Write>(writer: W, rows: &[CurvePoint]) -> Result<()> {
    write_rows(writer, rows)
}

fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row).context("Failed to write CSV row")?;
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Write to `path` when given, stdout otherwise
pub fn with_output<F>(path: Option<&Path>, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    match path {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write(&mut file)
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write(&mut handle)
        }
    }
}
