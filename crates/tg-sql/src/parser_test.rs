use super::*;

#[test]
fn test_parse_single_statement() {
    let parser = SqlParser::generic();
    let stmt = parser.parse_single("SELECT 1").unwrap();
    assert!(matches!(stmt, Statement::Query(_)));
}

#[test]
fn test_empty_sql_rejected() {
    let parser = SqlParser::generic();
    assert!(matches!(parser.parse(""), Err(SqlError::EmptySql)));
    assert!(matches!(parser.parse("   \n\t"), Err(SqlError::EmptySql)));
}

#[test]
fn test_multiple_statements() {
    let parser = SqlParser::generic();
    let stmts = parser.parse("SELECT 1; SELECT 2").unwrap();
    assert_eq!(stmts.len(), 2);
}

#[test]
fn test_from_dialect_name() {
    assert_eq!(
        SqlParser::from_dialect_name("generic").unwrap().dialect_name(),
        "generic"
    );
    assert_eq!(
        SqlParser::from_dialect_name("SNOWFLAKE").unwrap().dialect_name(),
        "snowflake"
    );
    assert!(matches!(
        SqlParser::from_dialect_name("oracle"),
        Err(SqlError::UnknownDialect(_))
    ));
}

#[test]
fn test_default_is_generic() {
    assert_eq!(SqlParser::default().dialect_name(), "generic");
}
