//! Identifier newtypes for externally owned entities.
//!
//! Criteria and employees are persisted by collaborators under integer keys;
//! the core only carries the keys through its computations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an appraisal criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionId(i64);

impl CriterionId {
    /// Creates a criterion id from its integer key.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the integer key.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a scored employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Creates an employee id from its integer key.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the integer key.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
