//! tg-sql - SQL parsing layer for the test-scenario generator
//!
//! This crate wraps sqlparser-rs with dialect support and extracts a
//! canonical [`QueryModel`] (filter, join, aggregate, and having
//! conditions) from a parsed statement. Extraction is synchronous and
//! purely functional: fresh per-call state, no caching, no I/O.

pub mod aggregates;
pub mod classifier;
pub mod dialect;
pub mod error;
pub mod extractor;
pub mod filters;
pub mod having;
pub mod joins;
pub mod model;
pub mod parser;
pub mod walk;

pub use classifier::ensure_supported;
pub use dialect::{GenericSqlDialect, SnowflakeSqlDialect, SqlDialect};
pub use error::{SqlError, SqlResult};
pub use extractor::extract_query_model;
pub use model::{
    AggregateCondition, CaseCondition, FilterCondition, FilterOperator, HavingCondition,
    JoinCondition, QueryModel,
};
pub use parser::SqlParser;
