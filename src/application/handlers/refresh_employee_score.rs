//! RefreshEmployeeScoreHandler - recomputes an employee's windowed weighted
//! score and grade, then persists them.
//!
//! Invoked after ratings or criterion weights change, so the denormalized
//! score stays current. The caller supplies the employee's rating records
//! (already joined with their criterion weights) and the reference time.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{DomainError, EmployeeId, Grade, Timestamp};
use crate::domain::scoring::{RatingRecord, ScoreAggregator, SCORING_WINDOW_MONTHS};
use crate::ports::{EmployeeScore, EmployeeScoreRepository};

/// Command to refresh one employee's stored score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshEmployeeScoreCommand {
    pub employee_id: EmployeeId,
    pub records: Vec<RatingRecord>,
    /// Reference time for the trailing window, normally `Timestamp::now()`.
    pub as_of: Timestamp,
}

/// Handler for refreshing employee scores.
pub struct RefreshEmployeeScoreHandler {
    scores: Arc<dyn EmployeeScoreRepository>,
}

impl RefreshEmployeeScoreHandler {
    pub fn new(scores: Arc<dyn EmployeeScoreRepository>) -> Self {
        Self { scores }
    }

    pub async fn handle(
        &self,
        command: RefreshEmployeeScoreCommand,
    ) -> Result<EmployeeScore, DomainError> {
        let score = ScoreAggregator::windowed_weighted_score(
            &command.records,
            SCORING_WINDOW_MONTHS,
            command.as_of,
        );
        let employee_score = EmployeeScore {
            employee_id: command.employee_id,
            score,
            grade: Grade::classify(score),
            updated_at: command.as_of,
        };

        self.scores.set_score(&employee_score).await?;

        debug!(
            employee_id = %employee_score.employee_id,
            score = employee_score.score,
            grade = %employee_score.grade,
            "Refreshed employee score"
        );

        Ok(employee_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEmployeeScoreStore;
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

    #[tokio::test]
    async fn handle_computes_score_and_grade_and_persists() {
        let store = Arc::new(InMemoryEmployeeScoreStore::new());
        let handler = RefreshEmployeeScoreHandler::new(store.clone());

        let command = RefreshEmployeeScoreCommand {
            employee_id: EmployeeId::new(1),
            records: vec![
                // May: 0.6*5 + 0.4*4 = 4.6
                record("2025-05-10T00:00:00Z", 5.0, 0.6),
                record("2025-05-12T00:00:00Z", 4.0, 0.4),
                // June: 0.6*4 + 0.4*4 = 4.0
                record("2025-06-10T00:00:00Z", 4.0, 0.6),
                record("2025-06-12T00:00:00Z", 4.0, 0.4),
            ],
            as_of: ts("2025-06-15T00:00:00Z"),
        };
        let result = handler.handle(command).await.unwrap();

        assert!((result.score - 4.3).abs() < 1e-12);
        assert_eq!(result.grade, Grade::B);

        let stored = store.get_score(&EmployeeId::new(1)).await.unwrap().unwrap();
        assert_eq!(stored, result);
    }

    #[tokio::test]
    async fn handle_with_no_recent_records_stores_zero_and_not_applicable() {
        let store = Arc::new(InMemoryEmployeeScoreStore::new());
        let handler = RefreshEmployeeScoreHandler::new(store.clone());

        let command = RefreshEmployeeScoreCommand {
            employee_id: EmployeeId::new(2),
            records: vec![record("2023-01-01T00:00:00Z", 5.0, 1.0)],
            as_of: ts("2025-06-15T00:00:00Z"),
        };
        let result = handler.handle(command).await.unwrap();

        assert_eq!(result.score, 0.0);
        assert_eq!(result.grade, Grade::NotApplicable);
    }

    #[tokio::test]
    async fn handle_overwrites_previous_score() {
        let store = Arc::new(InMemoryEmployeeScoreStore::new());
        let handler = RefreshEmployeeScoreHandler::new(store.clone());
        let as_of = ts("2025-06-15T00:00:00Z");

        handler
            .handle(RefreshEmployeeScoreCommand {
                employee_id: EmployeeId::new(3),
                records: vec![record("2025-06-01T00:00:00Z", 2.0, 1.0)],
                as_of,
            })
            .await
            .unwrap();
        handler
            .handle(RefreshEmployeeScoreCommand {
                employee_id: EmployeeId::new(3),
                records: vec![record("2025-06-01T00:00:00Z", 5.0, 1.0)],
                as_of,
            })
            .await
            .unwrap();

        let stored = store.get_score(&EmployeeId::new(3)).await.unwrap().unwrap();
        assert_eq!(stored.grade, Grade::A);
        assert_eq!(store.len(), 1);
    }
}
