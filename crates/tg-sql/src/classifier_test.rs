use super::*;
use crate::parser::SqlParser;

fn classify(sql: &str) -> SqlResult<()> {
    let parser = SqlParser::generic();
    let stmt = parser.parse_single(sql)?;
    ensure_supported(&stmt)
}

#[test]
fn test_select_supported() {
    assert!(classify("SELECT id FROM users").is_ok());
}

#[test]
fn test_union_supported() {
    assert!(classify("SELECT id FROM a UNION ALL SELECT id FROM b").is_ok());
}

#[test]
fn test_merge_supported() {
    assert!(classify(
        "MERGE INTO t USING s ON t.id = s.id \
         WHEN MATCHED THEN UPDATE SET t.x = s.x"
    )
    .is_ok());
}

#[test]
fn test_insert_select_supported() {
    assert!(classify("INSERT INTO archive SELECT id FROM users WHERE active = false").is_ok());
}

#[test]
fn test_insert_values_unsupported() {
    assert!(matches!(
        classify("INSERT INTO users VALUES (1)"),
        Err(SqlError::UnsupportedStatement)
    ));
}

#[test]
fn test_ddl_unsupported() {
    assert!(matches!(
        classify("DROP TABLE users"),
        Err(SqlError::UnsupportedStatement)
    ));
    assert!(matches!(
        classify("CREATE TABLE users (id INT)"),
        Err(SqlError::UnsupportedStatement)
    ));
}

#[test]
fn test_error_message_is_fixed() {
    let err = classify("DROP TABLE users").unwrap_err();
    assert_eq!(err.to_string(), "Only SELECT or MERGE queries are supported");
}
