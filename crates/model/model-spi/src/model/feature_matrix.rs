//! Feature matrix type
//!
//! A thin, validated wrapper around [`nalgebra::DMatrix`] laid out as
//! samples × features.

use crate::error::{ModelError, Result};
use nalgebra::DMatrix;

/// Non-empty samples × features matrix
///
/// Every constructor rejects matrices without rows or without columns, so
/// downstream stages can rely on at least one sample and one feature.
///
/// # Example
///
/// ```rust
/// use model_spi::FeatureMatrix;
///
/// let x = FeatureMatrix::from_column(&[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(x.nrows(), 3);
/// assert_eq!(x.ncols(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: DMatrix<f64>,
}

impl FeatureMatrix {
    /// Build a single-feature matrix, one sample per value
    pub fn from_column(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(ModelError::EmptyInput);
        }
        Ok(Self {
            data: DMatrix::from_column_slice(values.len(), 1, values),
        })
    }

    /// Build a matrix from row vectors
    ///
    /// Fails with [`ModelError::DimensionMismatch`] if the rows are ragged.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let first = rows.first().ok_or(ModelError::EmptyInput)?;
        let ncols = first.len();
        if ncols == 0 {
            return Err(ModelError::EmptyInput);
        }

        if let Some(bad) = rows.iter().find(|row| row.len() != ncols) {
            return Err(ModelError::DimensionMismatch {
                expected: ncols,
                actual: bad.len(),
            });
        }

        Ok(Self {
            data: DMatrix::from_fn(rows.len(), ncols, |r, c| rows[r][c]),
        })
    }

    /// Wrap an existing nalgebra matrix
    pub fn from_matrix(data: DMatrix<f64>) -> Result<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(ModelError::EmptyInput);
        }
        Ok(Self { data })
    }

    /// Number of samples
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of features
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Value at (`row`, `col`), `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// Copy of one feature column
    pub fn column(&self, col: usize) -> Vec<f64> {
        self.data.column(col).iter().copied().collect()
    }

    /// Copy of one sample row
    pub fn row(&self, row: usize) -> Vec<f64> {
        self.data.row(row).iter().copied().collect()
    }

    /// Borrow the underlying matrix
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Consume into the underlying matrix
    pub fn into_matrix(self) -> DMatrix<f64> {
        self.data
    }

    /// Fail with [`ModelError::DimensionMismatch`] unless the matrix has `expected` columns
    pub fn ensure_columns(&self, expected: usize) -> Result<()> {
        if self.ncols() != expected {
            return Err(ModelError::DimensionMismatch {
                expected,
                actual: self.ncols(),
            });
        }
        Ok(())
    }

    /// Fail with [`ModelError::DimensionMismatch`] unless `targets` has one value per row
    pub fn ensure_targets(&self, targets: &[f64]) -> Result<()> {
        if targets.len() != self.nrows() {
            return Err(ModelError::DimensionMismatch {
                expected: self.nrows(),
                actual: targets.len(),
            });
        }
        Ok(())
    }
}
