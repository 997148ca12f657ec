//! Scoring module - rating aggregation, rolling averages, and ranking.
//!
//! All functions here are pure and stateless: they take rating records and
//! weight maps as input and return computed results. No ports or adapters
//! needed since there is no I/O.

mod aggregator;
mod period;
mod ranking;
mod rating;

pub use aggregator::{ScoreAggregator, ROLLING_WINDOW_MONTHS, SCORING_WINDOW_MONTHS};
pub use period::PeriodKey;
pub use ranking::{RankedEmployee, RankingAnalyzer};
pub use rating::{CriterionRating, EmployeeRatings, RatingRecord};
