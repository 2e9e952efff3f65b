//! SQL dialect abstraction

use sqlparser::ast::Statement;
use sqlparser::dialect::{
    Dialect, GenericDialect as SqlParserGeneric, SnowflakeDialect as SqlParserSnowflake,
};
use sqlparser::parser::Parser;

use crate::error::{SqlError, SqlResult};

/// Trait for SQL dialect implementations
pub trait SqlDialect: Send + Sync {
    /// Get the underlying sqlparser dialect
    fn parser_dialect(&self) -> &dyn Dialect;

    /// Parse SQL into AST statements
    fn parse(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        Parser::parse_sql(self.parser_dialect(), sql).map_err(|e| {
            let msg = e.to_string();
            let (line, column) = error_location(&msg);
            SqlError::ParseError {
                message: msg,
                line,
                column,
            }
        })
    }

    /// Get the dialect name
    fn name(&self) -> &'static str;
}

/// Extract "Line: N, Column: M" from a sqlparser error message.
///
/// `ParserError` is a plain string wrapper with no structured location
/// data, so the location is recovered from the message text; (0, 0)
/// means none was found.
fn error_location(msg: &str) -> (usize, usize) {
    fn leading_number(text: &str) -> Option<usize> {
        let run: String = text
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        run.parse().ok()
    }
    let line = msg.split("Line: ").nth(1).and_then(leading_number);
    let column = msg.split("Column: ").nth(1).and_then(leading_number);
    match (line, column) {
        (Some(line), Some(column)) => (line, column),
        _ => (0, 0),
    }
}

/// Generic SQL dialect
///
/// The default for this service: permissive enough for the
/// Oracle-flavored statements it receives (MERGE, ROWNUM-style
/// identifiers, CTEs, window functions).
pub struct GenericSqlDialect {
    dialect: SqlParserGeneric,
}

impl GenericSqlDialect {
    /// Create a new generic dialect
    pub fn new() -> Self {
        Self {
            dialect: SqlParserGeneric {},
        }
    }
}

impl Default for GenericSqlDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlDialect for GenericSqlDialect {
    fn parser_dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn name(&self) -> &'static str {
        "generic"
    }
}

/// Snowflake SQL dialect
pub struct SnowflakeSqlDialect {
    dialect: SqlParserSnowflake,
}

impl SnowflakeSqlDialect {
    /// Create a new Snowflake dialect
    pub fn new() -> Self {
        Self {
            dialect: SqlParserSnowflake {},
        }
    }
}

impl Default for SnowflakeSqlDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlDialect for SnowflakeSqlDialect {
    fn parser_dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn name(&self) -> &'static str {
        "snowflake"
    }
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
