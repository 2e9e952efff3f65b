//! Error types for tg-sql

use thiserror::Error;

/// SQL parsing and extraction errors
///
/// Any error aborts the whole request: extraction never produces a
/// partial query model.
#[derive(Error, Debug)]
pub enum SqlError {
    /// SQL parse error, propagated from sqlparser
    #[error("SQL parse error at line {line}, column {column}: {message}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    /// Empty SQL input
    #[error("SQL is empty")]
    EmptySql,

    /// Statement root is not a query, a merge, or a container of a query block
    #[error("Only SELECT or MERGE queries are supported")]
    UnsupportedStatement,

    /// Unknown dialect name
    #[error("Unknown SQL dialect: {0}")]
    UnknownDialect(String),
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;
