//! Score aggregation over time windows.
//!
//! Two distinct policies live here and must not be conflated:
//!
//! - [`ScoreAggregator::rolling_average`] - unweighted mean over a short
//!   trailing window, shown as a "recent performance" signal.
//! - [`ScoreAggregator::windowed_weighted_score`] - monthly weighted sums
//!   averaged across months, the score used for ranking and grading.

use std::collections::BTreeMap;

use crate::domain::foundation::Timestamp;

use super::{PeriodKey, RatingRecord};

/// Trailing window for the display rolling average.
pub const ROLLING_WINDOW_MONTHS: u32 = 3;

/// Trailing window for the weighted score used in ranking.
pub const SCORING_WINDOW_MONTHS: u32 = 6;

/// Aggregation functions over rating records.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Groups records by calendar month and sums `value * weight` per month.
    ///
    /// This is a weighted sum, not a weighted mean: when criterion weights
    /// sum to 1 across a month it behaves like a weighted average, and
    /// scales proportionally otherwise. Records with weight 0 contribute
    /// nothing.
    pub fn aggregate_by_month(records: &[RatingRecord]) -> BTreeMap<PeriodKey, f64> {
        let mut by_month = BTreeMap::new();
        for record in records {
            let key = PeriodKey::from_timestamp(&record.recorded_at);
            *by_month.entry(key).or_insert(0.0) += record.weight * record.value;
        }
        by_month
    }

    /// Simple unweighted mean of values recorded within the trailing
    /// window (`recorded_at >= as_of - window_months`, inclusive).
    ///
    /// Returns 0 for an empty window, never NaN.
    pub fn rolling_average(
        records: &[RatingRecord],
        window_months: u32,
        as_of: Timestamp,
    ) -> f64 {
        let cutoff = as_of.minus_months(window_months);
        let in_window: Vec<f64> = records
            .iter()
            .filter(|r| r.recorded_at >= cutoff)
            .map(|r| r.value)
            .collect();

        if in_window.is_empty() {
            return 0.0;
        }
        in_window.iter().sum::<f64>() / in_window.len() as f64
    }

    /// Weighted score over the trailing window: monthly weighted sums,
    /// averaged across the months that have records.
    ///
    /// Returns 0 when no record falls inside the window.
    pub fn windowed_weighted_score(
        records: &[RatingRecord],
        window_months: u32,
        as_of: Timestamp,
    ) -> f64 {
        let cutoff = as_of.minus_months(window_months);
        let in_window: Vec<RatingRecord> = records
            .iter()
            .filter(|r| r.recorded_at >= cutoff)
            .cloned()
            .collect();

        let by_month = Self::aggregate_by_month(&in_window);
        if by_month.is_empty() {
            return 0.0;
        }
        by_month.values().sum::<f64>() / by_month.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn ts(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    fn record(rfc3339: &str, value: f64, weight: f64) -> RatingRecord {
        RatingRecord::new(ts(rfc3339), value).with_weight(weight)
    }

    #[test]
    fn aggregate_by_month_sums_weighted_values_per_month() {
        let records = vec![
            record("2025-05-03T10:00:00Z", 4.0, 0.6),
            record("2025-05-20T10:00:00Z", 3.0, 0.4),
            record("2025-06-01T10:00:00Z", 5.0, 0.6),
        ];

        let by_month = ScoreAggregator::aggregate_by_month(&records);

        assert_eq!(by_month.len(), 2);
        assert!((by_month[&PeriodKey::new(2025, 5)] - 3.6).abs() < 1e-12);
        assert!((by_month[&PeriodKey::new(2025, 6)] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn aggregate_by_month_ignores_unweighted_records() {
        let records = vec![
            record("2025-05-03T10:00:00Z", 5.0, 0.0),
            record("2025-05-04T10:00:00Z", 4.0, 0.5),
        ];

        let by_month = ScoreAggregator::aggregate_by_month(&records);
        assert!((by_month[&PeriodKey::new(2025, 5)] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn aggregate_by_month_of_empty_input_is_empty() {
        assert!(ScoreAggregator::aggregate_by_month(&[]).is_empty());
    }

    #[test]
    fn rolling_average_includes_only_window() {
        let as_of = ts("2025-06-15T00:00:00Z");
        let records = vec![
            record("2025-06-01T00:00:00Z", 5.0, 0.0),
            record("2025-04-01T00:00:00Z", 3.0, 0.0),
            // Outside the 3-month window
            record("2025-01-01T00:00:00Z", 1.0, 0.0),
        ];

        let avg = ScoreAggregator::rolling_average(&records, ROLLING_WINDOW_MONTHS, as_of);
        assert!((avg - 4.0).abs() < 1e-12);
    }

    #[test]
    fn rolling_average_window_lower_bound_is_inclusive() {
        let as_of = ts("2025-06-15T00:00:00Z");
        let records = vec![record("2025-03-15T00:00:00Z", 2.0, 0.0)];

        let avg = ScoreAggregator::rolling_average(&records, 3, as_of);
        assert!((avg - 2.0).abs() < 1e-12);
    }

    #[test]
    fn rolling_average_of_empty_input_is_zero() {
        let avg = ScoreAggregator::rolling_average(&[], ROLLING_WINDOW_MONTHS, Timestamp::now());
        assert_eq!(avg, 0.0);
        assert!(!avg.is_nan());
    }

    #[test]
    fn rolling_average_ignores_weights() {
        let as_of = ts("2025-06-15T00:00:00Z");
        let records = vec![
            record("2025-06-01T00:00:00Z", 4.0, 0.9),
            record("2025-06-02T00:00:00Z", 2.0, 0.1),
        ];

        let avg = ScoreAggregator::rolling_average(&records, 3, as_of);
        assert!((avg - 3.0).abs() < 1e-12);
    }

    #[test]
    fn windowed_weighted_score_averages_monthly_sums() {
        let as_of = ts("2025-06-15T00:00:00Z");
        let records = vec![
            // May: 0.6*4 + 0.4*3 = 3.6
            record("2025-05-03T00:00:00Z", 4.0, 0.6),
            record("2025-05-20T00:00:00Z", 3.0, 0.4),
            // June: 0.6*5 + 0.4*5 = 5.0
            record("2025-06-01T00:00:00Z", 5.0, 0.6),
            record("2025-06-02T00:00:00Z", 5.0, 0.4),
        ];

        let score =
            ScoreAggregator::windowed_weighted_score(&records, SCORING_WINDOW_MONTHS, as_of);
        assert!((score - 4.3).abs() < 1e-12);
    }

    #[test]
    fn windowed_weighted_score_excludes_old_months() {
        let as_of = ts("2025-06-15T00:00:00Z");
        let records = vec![
            record("2025-06-01T00:00:00Z", 4.0, 1.0),
            // Far outside the 6-month window; would drag the mean down
            record("2024-01-01T00:00:00Z", 1.0, 1.0),
        ];

        let score =
            ScoreAggregator::windowed_weighted_score(&records, SCORING_WINDOW_MONTHS, as_of);
        assert!((score - 4.0).abs() < 1e-12);
    }

    #[test]
    fn windowed_weighted_score_of_empty_window_is_zero() {
        let as_of = ts("2025-06-15T00:00:00Z");
        let records = vec![record("2023-01-01T00:00:00Z", 5.0, 1.0)];

        let score =
            ScoreAggregator::windowed_weighted_score(&records, SCORING_WINDOW_MONTHS, as_of);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn the_two_policies_differ_on_weighted_input() {
        let as_of = ts("2025-06-15T00:00:00Z");
        let records = vec![
            record("2025-06-01T00:00:00Z", 4.0, 0.5),
            record("2025-06-02T00:00:00Z", 2.0, 0.5),
        ];

        let rolling = ScoreAggregator::rolling_average(&records, 3, as_of);
        let weighted = ScoreAggregator::windowed_weighted_score(&records, 6, as_of);

        assert!((rolling - 3.0).abs() < 1e-12);
        assert!((weighted - 3.0).abs() < 1e-12);

        // Same numbers here only because weights sum to 1 in the month;
        // an unweighted record changes one policy and not the other.
        let mut with_extra = records.clone();
        with_extra.push(record("2025-06-03T00:00:00Z", 5.0, 0.0));

        assert!(ScoreAggregator::rolling_average(&with_extra, 3, as_of) > rolling);
        let weighted_again = ScoreAggregator::windowed_weighted_score(&with_extra, 6, as_of);
        assert!((weighted_again - weighted).abs() < 1e-12);
    }
}
