//! Appraisal Core - AHP criterion weighting and performance scoring.
//!
//! This crate implements the numeric core of an employee appraisal system:
//! deriving criterion weights from pairwise comparisons (Analytic Hierarchy
//! Process) and aggregating periodic ratings into weighted scores, letter
//! grades, and rankings.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
