//! Request and response payloads

use serde::{Deserialize, Serialize};
use tg_scenario::{ParserValidationSummary, Scenario};

/// Body of `POST /testcase/generate`
#[derive(Debug, Deserialize)]
pub struct SqlRequest {
    pub sql: String,
}

/// Body of `POST /testcase/generate-ai`
#[derive(Debug, Deserialize)]
pub struct AiScenarioRequest {
    pub sql: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Response of `POST /testcase/generate-ai`: the supplement's raw text,
/// passed through unparsed.
#[derive(Debug, Serialize)]
pub struct AiScenarioResponse {
    pub scenarios: String,
}

/// Body of `POST /testcase/generate-hybrid`
#[derive(Debug, Deserialize)]
pub struct HybridScenarioRequest {
    pub sql: String,
    #[serde(default)]
    pub include_ai_supplement: bool,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Response of `POST /testcase/generate-hybrid`
#[derive(Debug, Serialize)]
pub struct HybridScenarioResponse {
    pub standardized: bool,
    pub scenarios: Vec<Scenario>,
    pub validation: ParserValidationSummary,
    pub ai_used: bool,
    pub ai_supplement: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hybrid_request_defaults() {
        let request: HybridScenarioRequest =
            serde_json::from_str(r#"{"sql": "SELECT 1"}"#).unwrap();
        assert_eq!(request.sql, "SELECT 1");
        assert!(!request.include_ai_supplement);
        assert!(request.model.is_none());
        assert!(request.timeout_seconds.is_none());
    }

    #[test]
    fn test_ai_request_with_overrides() {
        let request: AiScenarioRequest = serde_json::from_str(
            r#"{"sql": "SELECT 1", "model": "mistral", "timeout_seconds": 5}"#,
        )
        .unwrap();
        assert_eq!(request.model.as_deref(), Some("mistral"));
        assert_eq!(request.timeout_seconds, Some(5));
    }

    #[test]
    fn test_hybrid_response_shape() {
        let response = HybridScenarioResponse {
            standardized: true,
            scenarios: Vec::new(),
            validation: ParserValidationSummary {
                join_count: 0,
                filter_count: 0,
                aggregate_count: 0,
                having_count: 0,
                generated_scenarios: 0,
            },
            ai_used: false,
            ai_supplement: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["standardized"], true);
        assert_eq!(value["ai_used"], false);
        assert!(value["ai_supplement"].is_null());
        assert_eq!(value["validation"]["generated_scenarios"], 0);
    }
}
