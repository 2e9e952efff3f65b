//! HTTP error translation
//!
//! Every core or supplement failure maps to a 400 with a `detail`
//! message, mirroring the service contract; the core itself performs no
//! logging and emits no partial results.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tg_ai::AiError;
use tg_sql::SqlError;

/// A request-level failure with a user-visible detail message
#[derive(Debug)]
pub struct ApiError {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<SqlError> for ApiError {
    fn from(error: SqlError) -> Self {
        Self {
            detail: error.to_string(),
        }
    }
}

impl From<AiError> for ApiError {
    fn from(error: AiError) -> Self {
        Self {
            detail: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_statement_detail() {
        let error = ApiError::from(SqlError::UnsupportedStatement);
        assert_eq!(error.detail, "Only SELECT or MERGE queries are supported");
    }

    #[test]
    fn test_response_status() {
        let response = ApiError {
            detail: "boom".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
