//! Benchmark timing records and their per-method grouping.
//!
//! Column names match the CSV files written by the benchmark runner:
//! `Sorting Method`, `Input Size`, `Execution Time`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One measured benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingRecord {
    #[serde(rename = "Sorting Method")]
    pub method: String,
    #[serde(rename = "Input Size")]
    pub input_size: u64,
    /// Milliseconds.
    #[serde(rename = "Execution Time")]
    pub execution_time: f64,
}

impl TimingRecord {
    pub fn new(method: impl Into<String>, input_size: u64, execution_time: f64) -> Self {
        Self {
            method: method.into(),
            input_size,
            execution_time,
        }
    }
}

/// One fitted value, serialized with the same columns as [`TimingRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(rename = "Sorting Method")]
    pub method: String,
    #[serde(rename = "Input Size")]
    pub input_size: u64,
    #[serde(rename = "Execution Time")]
    pub predicted_execution_time: f64,
}

/// A point on a sampled curve; the input size need not be an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    #[serde(rename = "Sorting Method")]
    pub method: String,
    #[serde(rename = "Input Size")]
    pub input_size: f64,
    #[serde(rename = "Execution Time")]
    pub execution_time: f64,
}

/// All rows of one method, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSeries {
    pub method: String,
    pub input_sizes: Vec<u64>,
    pub execution_times: Vec<f64>,
}

impl MethodSeries {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            input_sizes: Vec::new(),
            execution_times: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.input_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input_sizes.is_empty()
    }

    /// Input sizes as floating-point feature values.
    pub fn features(&self) -> Vec<f64> {
        self.input_sizes.iter().map(|&n| n as f64).collect()
    }
}

/// Ordered collection of [`TimingRecord`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<TimingRecord>,
}

impl Dataset {
    pub fn new(records: Vec<TimingRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: TimingRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TimingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct method names in first-seen order.
    pub fn methods(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.method.as_str()) {
                seen.push(record.method.as_str());
            }
        }
        seen
    }

    /// Rows grouped by method, groups in first-seen order.
    pub fn series(&self) -> Vec<MethodSeries> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<MethodSeries> = Vec::new();

        for record in &self.records {
            let slot = *index.entry(record.method.as_str()).or_insert_with(|| {
                groups.push(MethodSeries::new(&record.method));
                groups.len() - 1
            });
            groups[slot].input_sizes.push(record.input_size);
            groups[slot].execution_times.push(record.execution_time);
        }

        groups
    }
}

impl FromIterator<TimingRecord> for Dataset {
    fn from_iter<T: IntoIterator<Item = TimingRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
