//! Validated pairwise comparison matrix value object.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that occur when constructing or pairing a comparison matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Comparison matrix is empty")]
    Empty,

    #[error("Comparison matrix is not square: row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Comparison matrix entry ({row}, {col}) must be strictly positive, got {value}")]
    NonPositiveEntry { row: usize, col: usize, value: f64 },

    #[error("Comparison matrix entry ({row}, {col}) is not finite")]
    NonFiniteEntry { row: usize, col: usize },

    #[error("Matrix order {matrix_order} does not match criterion count {criterion_count}")]
    CardinalityMismatch {
        matrix_order: usize,
        criterion_count: usize,
    },
}

/// Square matrix of pairwise importance ratios.
///
/// Entry `(i, j)` encodes how much more important criterion `i` is than
/// criterion `j`. The validating constructor guarantees the matrix is
/// non-empty, square, and holds only strictly positive finite entries.
/// Reciprocity (`m[i][j] * m[j][i] == 1`) is assumed by the algorithm but
/// not enforced; [`PairwiseMatrix::is_reciprocal`] offers an advisory check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PairwiseMatrix {
    rows: Vec<Vec<f64>>,
}

impl PairwiseMatrix {
    /// Creates a matrix from raw rows, validating shape and entry domain.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        if rows.is_empty() {
            return Err(MatrixError::Empty);
        }

        let order = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != order {
                return Err(MatrixError::NotSquare {
                    row: i,
                    expected: order,
                    actual: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(MatrixError::NonFiniteEntry { row: i, col: j });
                }
                if value <= 0.0 {
                    return Err(MatrixError::NonPositiveEntry {
                        row: i,
                        col: j,
                        value,
                    });
                }
            }
        }

        Ok(Self { rows })
    }

    /// Returns the matrix order (number of criteria compared).
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the entry at `(row, col)`.
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Returns the sum of each column.
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.order()];
        for row in &self.rows {
            for (j, value) in row.iter().enumerate() {
                sums[j] += value;
            }
        }
        sums
    }

    /// Checks reciprocal consistency: `m[i][j] * m[j][i]` within
    /// `tolerance` of 1 for every pair.
    pub fn is_reciprocal(&self, tolerance: f64) -> bool {
        let n = self.order();
        for i in 0..n {
            for j in 0..n {
                if (self.rows[i][j] * self.rows[j][i] - 1.0).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

impl TryFrom<Vec<Vec<f64>>> for PairwiseMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<PairwiseMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PairwiseMatrix) -> Self {
        matrix.rows
    }
}
