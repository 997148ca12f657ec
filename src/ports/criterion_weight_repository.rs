//! Criterion weight repository port.
//!
//! Defines the contract for persisting derived criterion weights.
//! Implementations handle the actual storage operations.
//!
//! # Design
//!
//! - **Upsert semantics**: one weight row per criterion, created if absent
//!   and overwritten if present
//! - **Batch atomicity**: a recalculation replaces the whole weight set, so
//!   `upsert_all` must not leave a partial write observable; transactional
//!   batching is the implementation's responsibility, not the core's

use async_trait::async_trait;

use crate::domain::ahp::CriterionWeight;
use crate::domain::foundation::{CriterionId, DomainError};

/// Repository port for criterion weight persistence.
#[async_trait]
pub trait CriterionWeightRepository: Send + Sync {
    /// Upserts every weight in the batch, keyed by criterion id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn upsert_all(&self, weights: &[CriterionWeight]) -> Result<(), DomainError>;

    /// Returns all stored weights.
    async fn find_all(&self) -> Result<Vec<CriterionWeight>, DomainError>;

    /// Returns the weight for one criterion, if any is stored.
    async fn find_by_criterion(
        &self,
        criterion_id: &CriterionId,
    ) -> Result<Option<CriterionWeight>, DomainError>;
}
