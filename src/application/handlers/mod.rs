//! Command handlers for the appraisal workflows.

mod rank_employees;
mod recalculate_weights;
mod refresh_employee_score;
mod upsert_manual_weight;

pub use rank_employees::{RankEmployeesCommand, RankEmployeesHandler};
pub use recalculate_weights::{
    AhpOutcome, RecalculateWeightsCommand, RecalculateWeightsError, RecalculateWeightsHandler,
};
pub use refresh_employee_score::{RefreshEmployeeScoreCommand, RefreshEmployeeScoreHandler};
pub use upsert_manual_weight::{UpsertManualWeightCommand, UpsertManualWeightHandler};
