//! RankEmployeesHandler - ranks employees against the stored criterion
//! weights.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{CriterionId, DomainError};
use crate::domain::scoring::{EmployeeRatings, RankedEmployee, RankingAnalyzer};
use crate::ports::CriterionWeightRepository;

/// Command to rank a set of employees by weighted total score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankEmployeesCommand {
    pub employees: Vec<EmployeeRatings>,
}

/// Handler for producing the employee ranking.
///
/// Reads the current criterion weights and applies them to the supplied
/// rating sets. Criteria without a stored weight contribute nothing, so a
/// ranking requested before any AHP run yields all-zero scores rather than
/// an error.
pub struct RankEmployeesHandler {
    weights: Arc<dyn CriterionWeightRepository>,
}

impl RankEmployeesHandler {
    pub fn new(weights: Arc<dyn CriterionWeightRepository>) -> Self {
        Self { weights }
    }

    pub async fn handle(
        &self,
        command: RankEmployeesCommand,
    ) -> Result<Vec<RankedEmployee>, DomainError> {
        let weight_map: HashMap<CriterionId, f64> = self
            .weights
            .find_all()
            .await?
            .into_iter()
            .map(|w| (w.criterion_id, w.weight))
            .collect();

        let ranking = RankingAnalyzer::rank(&command.employees, &weight_map);

        debug!(
            employees = ranking.len(),
            criteria = weight_map.len(),
            "Ranked employees"
        );

        Ok(ranking)
    }
}
