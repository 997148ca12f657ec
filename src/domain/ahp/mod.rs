//! AHP module - priority derivation from pairwise comparisons.
//!
//! This module defines:
//! - The validated `PairwiseMatrix` value object
//! - The `AhpEngine` that derives priority weights and consistency metrics
//! - The standard Random Index table used to scale the consistency index
//! - `CriterionWeight`, the persisted pairing of criterion and weight

mod criterion_weight;
mod engine;
mod matrix;
mod random_index;

pub use criterion_weight::{normalize_weights, CriterionWeight};
pub use engine::{AhpEngine, AhpResult, CONSISTENCY_THRESHOLD};
pub use matrix::{MatrixError, PairwiseMatrix};
pub use random_index::{random_index, RANDOM_INDEX, RI_CEILING};
