//! Scenario value types and stable identifiers

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// Scenario classification
///
/// The final list is ordered by the literal string value of this enum
/// (BOUNDARY < NEGATIVE < POSITIVE), not by any logical severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScenarioType {
    Positive,
    Negative,
    Boundary,
}

impl ScenarioType {
    /// The literal wire value, also the sort key
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioType::Positive => "POSITIVE",
            ScenarioType::Negative => "NEGATIVE",
            ScenarioType::Boundary => "BOUNDARY",
        }
    }
}

/// Scenario criticality
///
/// Ordered by literal string value in the final list
/// (CRITICAL < HIGH < LOW < MEDIUM), not by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Criticality {
    Low,
    Medium,
    High,
    Critical,
}

impl Criticality {
    /// The literal wire value, also the sort key
    pub fn as_str(&self) -> &'static str {
        match self {
            Criticality::Low => "LOW",
            Criticality::Medium => "MEDIUM",
            Criticality::High => "HIGH",
            Criticality::Critical => "CRITICAL",
        }
    }
}

/// One synthesized test case: a human-readable description paired with
/// an expected outcome, a type, and a criticality.
///
/// `id` is a pure function of the other four fields: identical content
/// always produces an identical id, on any process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub description: String,
    pub expected_result: String,
    pub scenario_type: ScenarioType,
    pub criticality: Criticality,
}

impl Scenario {
    /// Build a scenario, deriving its stable identifier from the content.
    pub fn new(
        description: impl Into<String>,
        expected_result: impl Into<String>,
        scenario_type: ScenarioType,
        criticality: Criticality,
    ) -> Self {
        let description = description.into();
        let expected_result = expected_result.into();
        let id = stable_id(&description, &expected_result, scenario_type, criticality);
        Self {
            id,
            description,
            expected_result,
            scenario_type,
            criticality,
        }
    }
}

/// First 16 lowercase hex characters (8 bytes) of the SHA-1 digest of
/// the pipe-joined content tuple. This exact construction is load-bearing
/// for identifier stability and must not change.
pub fn stable_id(
    description: &str,
    expected_result: &str,
    scenario_type: ScenarioType,
    criticality: Criticality,
) -> String {
    let input = format!(
        "{}|{}|{}|{}",
        description,
        expected_result,
        scenario_type.as_str(),
        criticality.as_str()
    );
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut id = format!("{:x}", digest);
    id.truncate(16);
    id
}

#[cfg(test)]
#[path = "scenario_test.rs"]
mod tests;
