//! Rating record types consumed by the aggregators.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, EmployeeId, Timestamp};

/// One dated performance observation with the weight of its criterion.
///
/// The weight defaults to 0 when the criterion has no stored weight yet,
/// which makes the record inert in weighted sums rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub recorded_at: Timestamp,
    /// Rating value, commonly on a 1-5 scale.
    pub value: f64,
    /// Weight of the associated criterion.
    #[serde(default)]
    pub weight: f64,
}

impl RatingRecord {
    /// Creates a record with no criterion weight assigned.
    pub fn new(recorded_at: Timestamp, value: f64) -> Self {
        Self {
            recorded_at,
            value,
            weight: 0.0,
        }
    }

    /// Attaches the criterion weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// A rating of one criterion, used as input to ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionRating {
    pub criterion_id: CriterionId,
    pub value: f64,
}

/// All criterion ratings for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRatings {
    pub employee_id: EmployeeId,
    pub records: Vec<CriterionRating>,
}

impl EmployeeRatings {
    /// Creates an empty rating set for an employee.
    pub fn new(employee_id: EmployeeId) -> Self {
        Self {
            employee_id,
            records: Vec::new(),
        }
    }

    /// Adds a criterion rating.
    pub fn with_rating(mut self, criterion_id: CriterionId, value: f64) -> Self {
        self.records.push(CriterionRating {
            criterion_id,
            value,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_zero_weight() {
        let record = RatingRecord::new(Timestamp::now(), 4.0);
        assert_eq!(record.weight, 0.0);
    }

    #[test]
    fn with_weight_attaches_weight() {
        let record = RatingRecord::new(Timestamp::now(), 4.0).with_weight(0.25);
        assert_eq!(record.weight, 0.25);
    }

    #[test]
    fn record_weight_defaults_to_zero_when_absent_in_json() {
        let json = "{\"recorded_at\":\"2025-05-01T00:00:00Z\",\"value\":3.0}";
        let record: RatingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.weight, 0.0);
    }

    #[test]
    fn employee_ratings_builder_collects_records() {
        let ratings = EmployeeRatings::new(EmployeeId::new(1))
            .with_rating(CriterionId::new(1), 4.0)
            .with_rating(CriterionId::new(2), 3.0);

        assert_eq!(ratings.records.len(), 2);
        assert_eq!(ratings.records[1].criterion_id, CriterionId::new(2));
    }
}
