//! Endpoint handlers

use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use std::time::Duration;

use tg_ai::{GenerateOverrides, OllamaClient};
use tg_scenario::{
    supplement_prompt, synthesize_scenarios, ParserValidationSummary, Scenario,
};
use tg_sql::{extract_query_model, QueryModel, SqlParser, SqlResult};

use crate::api::{
    AiScenarioRequest, AiScenarioResponse, HybridScenarioRequest, HybridScenarioResponse,
    SqlRequest,
};
use crate::error::ApiError;

/// Shared application state: the parser and the supplement client.
/// Both are immutable after startup, so handlers need no locking.
pub struct AppState {
    parser: SqlParser,
    ollama: OllamaClient,
}

impl AppState {
    /// Build state for the given dialect name.
    pub fn new(dialect: &str) -> SqlResult<Self> {
        Ok(Self {
            parser: SqlParser::from_dialect_name(dialect)?,
            ollama: OllamaClient::from_env(),
        })
    }
}

/// `POST /testcase/generate` - deterministic scenarios only.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SqlRequest>,
) -> Result<Json<Vec<Scenario>>, ApiError> {
    let (_, scenarios) = run_pipeline(&state.parser, &request.sql)?;
    Ok(Json(scenarios))
}

/// `POST /testcase/generate-ai` - supplement text only.
pub async fn generate_ai(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AiScenarioRequest>,
) -> Result<Json<AiScenarioResponse>, ApiError> {
    let prompt = supplement_prompt(&request.sql);
    let overrides = overrides_from(request.model, request.endpoint, request.timeout_seconds);
    let scenarios = state.ollama.generate(&prompt, &overrides).await?;
    Ok(Json(AiScenarioResponse { scenarios }))
}

/// `POST /testcase/generate-hybrid` - deterministic scenarios plus the
/// validation summary, optionally joined by the AI supplement.
pub async fn generate_hybrid(
    State(state): State<Arc<AppState>>,
    Json(request): Json<HybridScenarioRequest>,
) -> Result<Json<HybridScenarioResponse>, ApiError> {
    let (model, scenarios) = run_pipeline(&state.parser, &request.sql)?;

    let ai_used = request.include_ai_supplement;
    let ai_supplement = if ai_used {
        let prompt = supplement_prompt(&request.sql);
        let overrides =
            overrides_from(request.model, request.endpoint, request.timeout_seconds);
        Some(state.ollama.generate(&prompt, &overrides).await?)
    } else {
        None
    };

    let validation = ParserValidationSummary::from_parts(&model, &scenarios);
    Ok(Json(HybridScenarioResponse {
        standardized: true,
        scenarios,
        validation,
        ai_used,
        ai_supplement,
    }))
}

/// Parse, extract, and synthesize; fails atomically.
fn run_pipeline(parser: &SqlParser, sql: &str) -> Result<(QueryModel, Vec<Scenario>), ApiError> {
    let statement = parser.parse_single(sql)?;
    let model = extract_query_model(&statement)?;
    let scenarios = synthesize_scenarios(&model);
    Ok((model, scenarios))
}

fn overrides_from(
    model: Option<String>,
    endpoint: Option<String>,
    timeout_seconds: Option<u64>,
) -> GenerateOverrides {
    GenerateOverrides {
        model,
        endpoint,
        timeout: timeout_seconds.map(Duration::from_secs),
    }
}
