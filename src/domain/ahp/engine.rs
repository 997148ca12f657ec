//! AHP Engine - priority weights and consistency metrics from a pairwise
//! comparison matrix.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CriterionId;

use super::{random_index, CriterionWeight, MatrixError, PairwiseMatrix};

/// Standard AHP acceptance threshold: a matrix with CR below this is
/// considered consistent enough to use.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Output of one AHP computation.
///
/// `weights` is parallel to the input matrix rows and sums to 1 within
/// floating-point tolerance. Ephemeral; recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpResult {
    pub weights: Vec<f64>,
    pub lambda_max: f64,
    pub ci: f64,
    pub cr: f64,
}

impl AhpResult {
    /// Whether the comparison matrix passes the CR < 0.1 acceptance test.
    pub fn is_consistent(&self) -> bool {
        self.cr < CONSISTENCY_THRESHOLD
    }
}

/// Priority derivation functions.
pub struct AhpEngine;

impl AhpEngine {
    /// Computes priority weights and consistency metrics.
    ///
    /// # Algorithm
    /// The approximate eigenvector method: normalize each entry by its
    /// column sum, then average across the row. λmax is estimated as
    /// `Σ colSum[i] * weights[i]` (the column-sum form; the row-quotient
    /// form gives slightly different numbers and is deliberately not used).
    ///
    /// # Edge Cases
    /// - Order 1: weight is 1, CI and CR are 0
    /// - Orders 1 and 2: RI is 0, so CR is defined as 0
    pub fn compute_priorities(matrix: &PairwiseMatrix) -> AhpResult {
        let n = matrix.order();
        let col_sums = matrix.column_sums();

        let weights: Vec<f64> = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&col_sums)
                    .map(|(value, col_sum)| value / col_sum)
                    .sum::<f64>()
                    / n as f64
            })
            .collect();

        let lambda_max: f64 = col_sums.iter().zip(&weights).map(|(c, w)| c * w).sum();

        let ci = if n > 1 {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        } else {
            0.0
        };

        let ri = random_index(n);
        let cr = if ri > 0.0 { ci / ri } else { 0.0 };

        AhpResult {
            weights,
            lambda_max,
            ci,
            cr,
        }
    }

    /// Computes priorities and pairs each weight with its criterion id.
    ///
    /// The criterion id sequence must be parallel to the matrix rows.
    /// Every returned weight carries the CR of the run, so stale weights
    /// can be told apart from ones derived under an inconsistent matrix.
    ///
    /// # Errors
    ///
    /// `CardinalityMismatch` if the id count differs from the matrix order.
    pub fn compute_weights(
        matrix: &PairwiseMatrix,
        criterion_ids: &[CriterionId],
    ) -> Result<Vec<CriterionWeight>, MatrixError> {
        if criterion_ids.len() != matrix.order() {
            return Err(MatrixError::CardinalityMismatch {
                matrix_order: matrix.order(),
                criterion_count: criterion_ids.len(),
            });
        }

        let result = Self::compute_priorities(matrix);
        Ok(criterion_ids
            .iter()
            .zip(&result.weights)
            .map(|(&id, &weight)| CriterionWeight::derived(id, weight, result.cr))
            .collect())
    }
}
