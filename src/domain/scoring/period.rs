//! Calendar-month period key for grouping ratings.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Timestamp;

/// A calendar month, used as the grouping key for period aggregates.
///
/// Derived from the timestamp's own date components, not renormalized to
/// any other time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PeriodKey {
    pub year: i32,
    pub month: u32,
}

impl PeriodKey {
    /// Creates a period key from explicit year and month.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Truncates a timestamp to its calendar month.
    pub fn from_timestamp(timestamp: &Timestamp) -> Self {
        let dt = timestamp.as_datetime();
        Self {
            year: dt.year(),
            month: dt.month(),
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
