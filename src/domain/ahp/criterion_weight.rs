//! Criterion weight record and normalization.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CriterionId;

/// Priority weight derived for one criterion, with the consistency ratio
/// of the comparison matrix it came from.
///
/// `consistency_ratio` is `None` for weights entered manually rather than
/// derived from a pairwise comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub criterion_id: CriterionId,
    pub weight: f64,
    pub consistency_ratio: Option<f64>,
}

impl CriterionWeight {
    /// Creates a manually assigned weight.
    pub fn new(criterion_id: CriterionId, weight: f64) -> Self {
        Self {
            criterion_id,
            weight,
            consistency_ratio: None,
        }
    }

    /// Creates a weight derived from an AHP run with the given CR.
    pub fn derived(criterion_id: CriterionId, weight: f64, consistency_ratio: f64) -> Self {
        Self {
            criterion_id,
            weight,
            consistency_ratio: Some(consistency_ratio),
        }
    }
}

/// Rescales weights in place so they sum to 1.
///
/// Applied after a manual upsert so the stored set stays a probability
/// vector. No-op when the slice is empty or sums to zero.
pub fn normalize_weights(weights: &mut [CriterionWeight]) {
    let sum: f64 = weights.iter().map(|w| w.weight).sum();
    if sum == 0.0 {
        return;
    }
    for weight in weights.iter_mut() {
        weight.weight /= sum;
    }
}
