//! UpsertManualWeightHandler - stores a manually assigned criterion weight
//! and renormalizes the stored set.
//!
//! Manual weights bypass the AHP run, so after the upsert the whole set is
//! rescaled to sum to 1 and written back. Manually entered weights carry no
//! consistency ratio.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ahp::{normalize_weights, CriterionWeight};
use crate::domain::foundation::{CriterionId, DomainError};
use crate::ports::CriterionWeightRepository;

/// Command to set one criterion's weight by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertManualWeightCommand {
    pub criterion_id: CriterionId,
    pub weight: f64,
}

/// Handler for manual weight entry.
pub struct UpsertManualWeightHandler {
    weights: Arc<dyn CriterionWeightRepository>,
}

impl UpsertManualWeightHandler {
    pub fn new(weights: Arc<dyn CriterionWeightRepository>) -> Self {
        Self { weights }
    }

    /// Upserts the weight, renormalizes the full set, and returns it.
    pub async fn handle(
        &self,
        command: UpsertManualWeightCommand,
    ) -> Result<Vec<CriterionWeight>, DomainError> {
        if !command.weight.is_finite() || command.weight < 0.0 {
            return Err(DomainError::validation(
                "weight",
                "Weight must be a non-negative finite number",
            ));
        }

        let mut all = self.weights.find_all().await?;
        match all
            .iter_mut()
            .find(|w| w.criterion_id == command.criterion_id)
        {
            Some(existing) => {
                existing.weight = command.weight;
                existing.consistency_ratio = None;
            }
            None => all.push(CriterionWeight::new(command.criterion_id, command.weight)),
        }

        normalize_weights(&mut all);
        self.weights.upsert_all(&all).await?;

        debug!(
            criterion_id = %command.criterion_id,
            criteria = all.len(),
            "Upserted manual weight and renormalized"
        );

        Ok(all)
    }
}
