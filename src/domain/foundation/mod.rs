//! Shared domain primitives.

mod errors;
mod grade;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use grade::{Grade, GRADE_THRESHOLDS};
pub use ids::{CriterionId, EmployeeId};
pub use timestamp::Timestamp;
