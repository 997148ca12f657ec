//! Ranking of employees by weighted total score.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{CriterionId, EmployeeId};

use super::EmployeeRatings;

/// An employee with their weighted total score, as placed in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEmployee {
    pub employee_id: EmployeeId,
    pub total_score: f64,
}

/// Ranking functions over employee rating sets.
pub struct RankingAnalyzer;

impl RankingAnalyzer {
    /// Ranks employees by `Σ value * weight` over their ratings.
    ///
    /// Criteria without a stored weight contribute 0. Output is sorted
    /// descending by total score; employees with equal scores keep their
    /// input order (stable sort, no secondary key).
    pub fn rank(
        employees: &[EmployeeRatings],
        weights: &HashMap<CriterionId, f64>,
    ) -> Vec<RankedEmployee> {
        let mut ranking: Vec<RankedEmployee> = employees
            .iter()
            .map(|employee| {
                let total_score = employee
                    .records
                    .iter()
                    .map(|r| r.value * weights.get(&r.criterion_id).copied().unwrap_or(0.0))
                    .sum();
                RankedEmployee {
                    employee_id: employee.employee_id,
                    total_score,
                }
            })
            .collect();

        ranking.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
        ranking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(pairs: &[(i64, f64)]) -> HashMap<CriterionId, f64> {
        pairs
            .iter()
            .map(|&(id, w)| (CriterionId::new(id), w))
            .collect()
    }

    #[test]
    fn rank_sorts_descending_by_total_score() {
        let employees = vec![
            EmployeeRatings::new(EmployeeId::new(1))
                .with_rating(CriterionId::new(1), 2.0)
                .with_rating(CriterionId::new(2), 2.0),
            EmployeeRatings::new(EmployeeId::new(2))
                .with_rating(CriterionId::new(1), 5.0)
                .with_rating(CriterionId::new(2), 4.0),
        ];
        let weights = weights(&[(1, 0.6), (2, 0.4)]);

        let ranking = RankingAnalyzer::rank(&employees, &weights);

        assert_eq!(ranking[0].employee_id, EmployeeId::new(2));
        assert!((ranking[0].total_score - 4.6).abs() < 1e-12);
        assert_eq!(ranking[1].employee_id, EmployeeId::new(1));
        assert!((ranking[1].total_score - 2.0).abs() < 1e-12);
    }

    #[test]
    fn rank_treats_missing_weights_as_zero() {
        let employees = vec![EmployeeRatings::new(EmployeeId::new(1))
            .with_rating(CriterionId::new(1), 5.0)
            .with_rating(CriterionId::new(99), 5.0)];
        let weights = weights(&[(1, 0.5)]);

        let ranking = RankingAnalyzer::rank(&employees, &weights);
        assert!((ranking[0].total_score - 2.5).abs() < 1e-12);
    }

    #[test]
    fn rank_preserves_input_order_on_ties() {
        let employees = vec![
            EmployeeRatings::new(EmployeeId::new(7)).with_rating(CriterionId::new(1), 3.0),
            EmployeeRatings::new(EmployeeId::new(3)).with_rating(CriterionId::new(1), 3.0),
            EmployeeRatings::new(EmployeeId::new(5)).with_rating(CriterionId::new(1), 3.0),
        ];
        let weights = weights(&[(1, 1.0)]);

        let ranking = RankingAnalyzer::rank(&employees, &weights);

        let order: Vec<EmployeeId> = ranking.iter().map(|r| r.employee_id).collect();
        assert_eq!(
            order,
            vec![EmployeeId::new(7), EmployeeId::new(3), EmployeeId::new(5)]
        );
    }

    #[test]
    fn rank_of_empty_input_is_empty() {
        let ranking = RankingAnalyzer::rank(&[], &HashMap::new());
        assert!(ranking.is_empty());
    }

    #[test]
    fn employee_with_no_records_scores_zero() {
        let employees = vec![
            EmployeeRatings::new(EmployeeId::new(1)),
            EmployeeRatings::new(EmployeeId::new(2)).with_rating(CriterionId::new(1), 1.0),
        ];
        let weights = weights(&[(1, 1.0)]);

        let ranking = RankingAnalyzer::rank(&employees, &weights);

        assert_eq!(ranking[0].employee_id, EmployeeId::new(2));
        assert_eq!(ranking[1].total_score, 0.0);
    }
}
