//! RecalculateWeightsHandler - derives criterion weights from a pairwise
//! comparison matrix and persists them.
//!
//! The matrix arrives as raw nested arrays from the outer layer and is
//! validated here into a `PairwiseMatrix` before any computation runs.
//! Weights are upserted per criterion together with the run's CR; results
//! are returned to the caller even when the matrix fails the consistency
//! test, since accepting or rejecting an inconsistent matrix is a caller
//! decision.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::ahp::{AhpEngine, AhpResult, CriterionWeight, MatrixError, PairwiseMatrix};
use crate::domain::foundation::{CriterionId, DomainError};
use crate::ports::CriterionWeightRepository;

/// Command to recalculate weights from a comparison matrix.
///
/// `criterion_ids` must be parallel to the matrix rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculateWeightsCommand {
    pub matrix: Vec<Vec<f64>>,
    pub criterion_ids: Vec<CriterionId>,
}

/// Result of a successful recalculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpOutcome {
    pub criterion_weights: Vec<CriterionWeight>,
    pub analysis: AhpResult,
    pub is_consistent: bool,
}

/// Errors from the recalculation workflow.
#[derive(Debug, Error)]
pub enum RecalculateWeightsError {
    #[error(transparent)]
    InvalidMatrix(#[from] MatrixError),

    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

/// Handler for deriving and persisting criterion weights.
pub struct RecalculateWeightsHandler {
    weights: Arc<dyn CriterionWeightRepository>,
}

impl RecalculateWeightsHandler {
    pub fn new(weights: Arc<dyn CriterionWeightRepository>) -> Self {
        Self { weights }
    }

    pub async fn handle(
        &self,
        command: RecalculateWeightsCommand,
    ) -> Result<AhpOutcome, RecalculateWeightsError> {
        let matrix = PairwiseMatrix::new(command.matrix)?;
        let criterion_weights = AhpEngine::compute_weights(&matrix, &command.criterion_ids)?;
        let analysis = AhpEngine::compute_priorities(&matrix);

        self.weights.upsert_all(&criterion_weights).await?;

        debug!(
            order = matrix.order(),
            cr = analysis.cr,
            consistent = analysis.is_consistent(),
            "Recalculated criterion weights"
        );

        let is_consistent = analysis.is_consistent();
        Ok(AhpOutcome {
            criterion_weights,
            analysis,
            is_consistent,
        })
    }
}
