//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `ahp` - Pairwise comparison matrix and priority derivation
//! - `scoring` - Rating aggregation, rolling averages, and ranking

pub mod ahp;
pub mod foundation;
pub mod scoring;
