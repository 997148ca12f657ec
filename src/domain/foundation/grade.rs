//! Letter grade classification for aggregated scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum average required for each grade, evaluated top-down.
///
/// Every boundary uses `>=`, so the mapping is monotonic and gap-free;
/// anything below the E threshold falls through to [`Grade::NotApplicable`].
pub const GRADE_THRESHOLDS: [(f64, Grade); 5] = [
    (4.5, Grade::A),
    (3.5, Grade::B),
    (2.5, Grade::C),
    (1.5, Grade::D),
    (1.0, Grade::E),
];

/// Ordinal performance grade derived from an aggregated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    /// Score below the lowest defined threshold.
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Grade {
    /// Classifies an average score into a grade.
    ///
    /// Total over all reals: negative values and NaN resolve to
    /// `NotApplicable` rather than erroring.
    pub fn classify(average: f64) -> Grade {
        GRADE_THRESHOLDS
            .iter()
            .find(|(min, _)| average >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::NotApplicable)
    }

    /// Returns the display label for this grade.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
