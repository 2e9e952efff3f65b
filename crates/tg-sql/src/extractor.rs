//! Query model assembly
//!
//! Runs the statement classifier, then the four condition extractors,
//! and packages their outputs into one immutable [`QueryModel`].

use sqlparser::ast::Statement;

use crate::aggregates::extract_aggregates;
use crate::classifier::ensure_supported;
use crate::error::SqlResult;
use crate::filters::extract_filters;
use crate::having::extract_having;
use crate::joins::extract_joins;
use crate::model::QueryModel;

/// Extract the query model from a parsed statement.
///
/// Fails with `UnsupportedStatement` before any extraction runs if the
/// statement shape is not supported; there is never a partial model.
pub fn extract_query_model(statement: &Statement) -> SqlResult<QueryModel> {
    ensure_supported(statement)?;

    Ok(QueryModel {
        joins: extract_joins(statement),
        filters: extract_filters(statement),
        aggregates: extract_aggregates(statement),
        case_conditions: Vec::new(),
        having_conditions: extract_having(statement),
    })
}
