//! Employee score repository port.
//!
//! The aggregated score and grade are denormalized onto the employee by a
//! persistence collaborator; this port defines that write contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, EmployeeId, Grade, Timestamp};

/// An employee's current aggregated score and grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeScore {
    pub employee_id: EmployeeId,
    pub score: f64,
    pub grade: Grade,
    pub updated_at: Timestamp,
}

/// Repository port for persisting refreshed employee scores.
#[async_trait]
pub trait EmployeeScoreRepository: Send + Sync {
    /// Stores the score for an employee, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if the employee does not exist
    /// - `DatabaseError` on persistence failure
    async fn set_score(&self, score: &EmployeeScore) -> Result<(), DomainError>;

    /// Returns the stored score for an employee, if any.
    async fn get_score(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<EmployeeScore>, DomainError>;
}
