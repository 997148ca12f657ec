//! In-memory adapter implementations.
//!
//! Useful for development, testing, and single-process deployments without
//! persistence requirements. Production deployments substitute
//! database-backed implementations of the same ports.

mod criterion_weight_store;
mod employee_score_store;

pub use criterion_weight_store::InMemoryCriterionWeightStore;
pub use employee_score_store::InMemoryEmployeeScoreStore;
