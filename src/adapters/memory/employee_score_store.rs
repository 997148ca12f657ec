//! In-memory employee score store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, EmployeeId};
use crate::ports::{EmployeeScore, EmployeeScoreRepository};

/// In-memory implementation of the `EmployeeScoreRepository` port.
///
/// Thread-safe via internal `Mutex`. Does not persist data across restarts.
#[derive(Default)]
pub struct InMemoryEmployeeScoreStore {
    scores: Mutex<HashMap<EmployeeId, EmployeeScore>>,
}

impl InMemoryEmployeeScoreStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored scores.
    pub fn len(&self) -> usize {
        self.scores.lock().unwrap().len()
    }

    /// Returns true if no scores are stored.
    pub fn is_empty(&self) -> bool {
        self.scores.lock().unwrap().is_empty()
    }

    /// Clears all stored scores.
    pub fn clear(&self) {
        self.scores.lock().unwrap().clear();
    }
}

#[async_trait]
impl EmployeeScoreRepository for InMemoryEmployeeScoreStore {
    async fn set_score(&self, score: &EmployeeScore) -> Result<(), DomainError> {
        self.scores
            .lock()
            .unwrap()
            .insert(score.employee_id, score.clone());
        Ok(())
    }

    async fn get_score(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<EmployeeScore>, DomainError> {
        Ok(self.scores.lock().unwrap().get(employee_id).cloned())
    }
}
