//! Query model value types
//!
//! Every record here is an immutable snapshot built once per request and
//! discarded after the response is produced; nothing is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed operator vocabulary for filter and having conditions
///
/// Serialized as the literal SQL operator text. Keeping this closed (as
/// opposed to free strings) lets the compiler flag any comparison shape
/// an extractor forgets to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    GtEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "BETWEEN")]
    Between,
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "NOT IN")]
    NotIn,
    #[serde(rename = "IS")]
    Is,
}

impl FilterOperator {
    /// The literal operator text
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::Gt => ">",
            FilterOperator::GtEq => ">=",
            FilterOperator::Lt => "<",
            FilterOperator::LtEq => "<=",
            FilterOperator::NotEq => "!=",
            FilterOperator::Like => "LIKE",
            FilterOperator::Between => "BETWEEN",
            FilterOperator::In => "IN",
            FilterOperator::NotIn => "NOT IN",
            FilterOperator::Is => "IS",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One WHERE-clause predicate in canonical form
///
/// `values` holds one entry for binary comparisons, LIKE, and IS, two
/// for BETWEEN (low then high), and one per member for IN / NOT IN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub column: String,
    pub operator: FilterOperator,
    pub values: Vec<String>,
}

/// One equality/inequality predicate found in a join or merge match clause
///
/// The key is directional: `a.x = b.y` and `b.y = a.x` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinCondition {
    pub left_column: String,
    pub right_column: String,
}

/// One aggregate-function call found in a select list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCondition {
    pub function: String,
    pub column: String,
}

/// Reserved: CASE-expression branches are not currently extracted, but
/// the field stays in the wire format for compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseCondition {
    pub condition: String,
    pub result: String,
}

/// One aggregate comparison found in a HAVING clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HavingCondition {
    pub function: String,
    pub column: String,
    pub operator: FilterOperator,
    pub value: String,
}

/// The extracted summary of one statement's observable conditions
///
/// Each sequence is deduplicated by its extractor's canonical key;
/// cross-sequence duplication is deliberately not checked (a column may
/// appear in both a filter and a having condition).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryModel {
    pub joins: Vec<JoinCondition>,
    pub filters: Vec<FilterCondition>,
    pub aggregates: Vec<AggregateCondition>,
    pub case_conditions: Vec<CaseCondition>,
    pub having_conditions: Vec<HavingCondition>,
}
