//! Statement classification
//!
//! The service accepts SELECT and MERGE statements, plus any statement
//! that contains a query block somewhere in its tree (for example
//! `INSERT INTO t SELECT ...`). Everything else is rejected before
//! extraction runs.

use sqlparser::ast::Statement;

use crate::error::{SqlError, SqlResult};
use crate::walk;

/// Confirm the statement is a supported shape.
///
/// `INSERT ... VALUES`, bare DDL, and other query-free statements fail
/// with [`SqlError::UnsupportedStatement`]. No side effects.
pub fn ensure_supported(statement: &Statement) -> SqlResult<()> {
    if matches!(statement, Statement::Query(_) | Statement::Merge(_)) {
        return Ok(());
    }

    let mut contains_select = false;
    walk::for_each_select(statement, |_| contains_select = true);

    if contains_select {
        Ok(())
    } else {
        Err(SqlError::UnsupportedStatement)
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
