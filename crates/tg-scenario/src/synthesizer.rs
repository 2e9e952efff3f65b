//! Deterministic scenario synthesis
//!
//! Template rules are fixed, not configurable. Each condition in the
//! query model maps to one or two scenarios; candidates are produced in
//! model order (filters, joins, aggregates, having), globally
//! deduplicated by content, then sorted into the one canonical order.

use std::collections::HashSet;

use tg_sql::QueryModel;

use crate::scenario::{Criticality, Scenario, ScenarioType};

type ContentKey = (String, String, ScenarioType, Criticality);

/// Map a query model to the final scenario list.
pub fn synthesize_scenarios(model: &QueryModel) -> Vec<Scenario> {
    let mut scenarios: Vec<Scenario> = Vec::new();
    let mut seen: HashSet<ContentKey> = HashSet::new();

    for filter in &model.filters {
        append_unique(
            &mut scenarios,
            &mut seen,
            Scenario::new(
                format!(
                    "Verify {} satisfies condition {}",
                    filter.column, filter.operator
                ),
                "Rows matching condition should be returned",
                ScenarioType::Positive,
                Criticality::High,
            ),
        );
        append_unique(
            &mut scenarios,
            &mut seen,
            Scenario::new(
                format!(
                    "Verify rows not satisfying {} condition are excluded",
                    filter.column
                ),
                "Non matching rows should not appear",
                ScenarioType::Negative,
                Criticality::High,
            ),
        );
    }

    for join in &model.joins {
        append_unique(
            &mut scenarios,
            &mut seen,
            Scenario::new(
                format!(
                    "Verify join between {} and {}",
                    join.left_column, join.right_column
                ),
                "Only matching rows across tables should be returned",
                ScenarioType::Positive,
                Criticality::Critical,
            ),
        );
        append_unique(
            &mut scenarios,
            &mut seen,
            Scenario::new(
                format!(
                    "Verify behavior when join condition between {} and {} fails",
                    join.left_column, join.right_column
                ),
                "Rows without matching join should not appear",
                ScenarioType::Negative,
                Criticality::High,
            ),
        );
    }

    for aggregate in &model.aggregates {
        append_unique(
            &mut scenarios,
            &mut seen,
            Scenario::new(
                format!(
                    "Verify {} aggregation on column {}",
                    aggregate.function, aggregate.column
                ),
                "Aggregation should compute correct value",
                ScenarioType::Positive,
                Criticality::Critical,
            ),
        );
        append_unique(
            &mut scenarios,
            &mut seen,
            Scenario::new(
                format!(
                    "Verify {} aggregation handles null values correctly on {}",
                    aggregate.function, aggregate.column
                ),
                "Null values should not break aggregation logic",
                ScenarioType::Boundary,
                Criticality::Medium,
            ),
        );
    }

    for having in &model.having_conditions {
        append_unique(
            &mut scenarios,
            &mut seen,
            Scenario::new(
                format!(
                    "Verify HAVING condition on {}({}) {} {}",
                    having.function, having.column, having.operator, having.value
                ),
                "Only groups satisfying HAVING condition should appear",
                ScenarioType::Positive,
                Criticality::Critical,
            ),
        );
        append_unique(
            &mut scenarios,
            &mut seen,
            Scenario::new(
                format!(
                    "Verify groups not satisfying HAVING condition {}({}) {} {} are excluded",
                    having.function, having.column, having.operator, having.value
                ),
                "Invalid groups should not be returned",
                ScenarioType::Negative,
                Criticality::High,
            ),
        );
    }

    // Canonical output order: literal string values, so the result is
    // independent of extraction order.
    scenarios.sort_by(|a, b| {
        (
            a.scenario_type.as_str(),
            a.criticality.as_str(),
            &a.description,
            &a.expected_result,
        )
            .cmp(&(
                b.scenario_type.as_str(),
                b.criticality.as_str(),
                &b.description,
                &b.expected_result,
            ))
    });

    scenarios
}

/// Build the free-text prompt for the AI supplement: a fixed
/// QA-engineer preamble followed by the literal SQL text.
pub fn supplement_prompt(sql: &str) -> String {
    format!(
        "You are a professional QA engineer.\n\n\
         Generate structured SQL test scenarios for the following query.\n\n\
         Include:\n\
         - Positive cases\n\
         - Negative cases\n\
         - Boundary cases\n\
         - Edge cases\n\n\
         SQL Query:\n{sql}"
    )
}

fn append_unique(
    scenarios: &mut Vec<Scenario>,
    seen: &mut HashSet<ContentKey>,
    scenario: Scenario,
) {
    let key = (
        scenario.description.clone(),
        scenario.expected_result.clone(),
        scenario.scenario_type,
        scenario.criticality,
    );
    if !seen.insert(key) {
        return;
    }
    scenarios.push(scenario);
}

#[cfg(test)]
#[path = "synthesizer_test.rs"]
mod tests;
