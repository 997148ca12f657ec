//! In-memory criterion weight store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::ahp::CriterionWeight;
use crate::domain::foundation::{CriterionId, DomainError};
use crate::ports::CriterionWeightRepository;

/// In-memory implementation of the `CriterionWeightRepository` port.
///
/// Thread-safe via internal `Mutex`. The whole batch is written under a
/// single lock acquisition, so a partial upsert is never observable.
#[derive(Default)]
pub struct InMemoryCriterionWeightStore {
    weights: Mutex<HashMap<CriterionId, CriterionWeight>>,
}

impl InMemoryCriterionWeightStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored weights.
    pub fn len(&self) -> usize {
        self.weights.lock().unwrap().len()
    }

    /// Returns true if no weights are stored.
    pub fn is_empty(&self) -> bool {
        self.weights.lock().unwrap().is_empty()
    }

    /// Clears all stored weights.
    ///
    /// Useful for testing scenarios that need a clean slate.
    pub fn clear(&self) {
        self.weights.lock().unwrap().clear();
    }
}

#[async_trait]
impl CriterionWeightRepository for InMemoryCriterionWeightStore {
    async fn upsert_all(&self, weights: &[CriterionWeight]) -> Result<(), DomainError> {
        let mut store = self.weights.lock().unwrap();
        for weight in weights {
            store.insert(weight.criterion_id, weight.clone());
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<CriterionWeight>, DomainError> {
        let store = self.weights.lock().unwrap();
        let mut all: Vec<CriterionWeight> = store.values().cloned().collect();
        all.sort_by_key(|w| w.criterion_id);
        Ok(all)
    }

    async fn find_by_criterion(
        &self,
        criterion_id: &CriterionId,
    ) -> Result<Option<CriterionWeight>, DomainError> {
        Ok(self.weights.lock().unwrap().get(criterion_id).cloned())
    }
}
