//! Derived validation summary

use serde::{Deserialize, Serialize};
use tg_sql::QueryModel;

use crate::scenario::Scenario;

/// Read-only projection of the query model and scenario list sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserValidationSummary {
    pub join_count: usize,
    pub filter_count: usize,
    pub aggregate_count: usize,
    pub having_count: usize,
    pub generated_scenarios: usize,
}

impl ParserValidationSummary {
    /// Summarize a model and the scenarios synthesized from it.
    pub fn from_parts(model: &QueryModel, scenarios: &[Scenario]) -> Self {
        Self {
            join_count: model.joins.len(),
            filter_count: model.filters.len(),
            aggregate_count: model.aggregates.len(),
            having_count: model.having_conditions.len(),
            generated_scenarios: scenarios.len(),
        }
    }
}
