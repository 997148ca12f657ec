//! Ports - contracts the core exposes to its persistence collaborators.

mod criterion_weight_repository;
mod employee_score_repository;

pub use criterion_weight_repository::CriterionWeightRepository;
pub use employee_score_repository::{EmployeeScore, EmployeeScoreRepository};
