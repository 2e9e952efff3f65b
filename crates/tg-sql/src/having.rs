//! Having condition extraction from grouping-filter clauses

use sqlparser::ast::{Expr, Statement};
use std::collections::HashSet;

use crate::aggregates::{aggregate_function_name, first_argument};
use crate::model::{FilterOperator, HavingCondition};
use crate::walk;

type HavingKey = (String, String, FilterOperator, String);

/// Extract every aggregate comparison from every query block's HAVING
/// predicate.
pub fn extract_having(statement: &Statement) -> Vec<HavingCondition> {
    let mut conditions: Vec<HavingCondition> = Vec::new();
    let mut seen: HashSet<HavingKey> = HashSet::new();

    walk::for_each_select(statement, |select| {
        if let Some(predicate) = &select.having {
            walk::walk_predicate(predicate, &mut |leaf| {
                recognize_having(leaf, &mut conditions, &mut seen);
            });
        }
    });

    conditions
}

/// Leaf recognizer: a binary comparison whose left operand is a known
/// aggregate call with an argument. Anything else is ignored.
fn recognize_having(
    leaf: &Expr,
    conditions: &mut Vec<HavingCondition>,
    seen: &mut HashSet<HavingKey>,
) {
    let Expr::BinaryOp { left, op, right } = leaf else {
        return;
    };
    let Some(operator) = walk::comparison_operator(op) else {
        return;
    };
    let Expr::Function(func) = left.as_ref() else {
        return;
    };
    let Some(function) = aggregate_function_name(func) else {
        return;
    };
    let Some(column) = first_argument(func) else {
        return;
    };

    let value = right.to_string();
    let key = (function.clone(), column.clone(), operator, value.clone());
    if !seen.insert(key) {
        return;
    }
    conditions.push(HavingCondition {
        function,
        column,
        operator,
        value,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SqlParser;

    fn parse_and_extract(sql: &str) -> Vec<HavingCondition> {
        let parser = SqlParser::generic();
        let stmt = parser.parse_single(sql).unwrap();
        extract_having(&stmt)
    }

    #[test]
    fn test_count_comparison() {
        let conditions = parse_and_extract(
            "SELECT dept_id, COUNT(e.id) FROM employees e GROUP BY dept_id HAVING COUNT(e.id) > 2",
        );
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].function, "COUNT");
        assert_eq!(conditions[0].column, "e.id");
        assert_eq!(conditions[0].operator, FilterOperator::Gt);
        assert_eq!(conditions[0].value, "2");
    }

    #[test]
    fn test_multiple_operators() {
        let conditions = parse_and_extract(
            "SELECT dept_id FROM employees GROUP BY dept_id \
             HAVING COUNT(id) >= 2 AND COUNT(id) != 99",
        );
        let operators: Vec<FilterOperator> = conditions.iter().map(|c| c.operator).collect();
        assert!(operators.contains(&FilterOperator::GtEq));
        assert!(operators.contains(&FilterOperator::NotEq));
    }

    #[test]
    fn test_count_star() {
        let conditions = parse_and_extract(
            "SELECT dept_id, COUNT(*) FROM employees GROUP BY dept_id HAVING COUNT(*) > 0",
        );
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].column, "*");
    }

    #[test]
    fn test_non_aggregate_left_operand_ignored() {
        let conditions = parse_and_extract(
            "SELECT dept_id FROM employees GROUP BY dept_id HAVING dept_id > 2",
        );
        assert!(conditions.is_empty());
    }

    #[test]
    fn test_duplicate_comparison_deduplicated() {
        let conditions = parse_and_extract(
            "SELECT dept_id FROM employees GROUP BY dept_id \
             HAVING COUNT(id) > 2 OR COUNT(id) > 2",
        );
        assert_eq!(conditions.len(), 1);
    }

    #[test]
    fn test_same_aggregate_different_value_kept() {
        let conditions = parse_and_extract(
            "SELECT dept_id FROM employees GROUP BY dept_id \
             HAVING COUNT(id) > 2 AND COUNT(id) < 100",
        );
        assert_eq!(conditions.len(), 2);
    }

    #[test]
    fn test_no_having_clause() {
        let conditions = parse_and_extract("SELECT dept_id FROM employees GROUP BY dept_id");
        assert!(conditions.is_empty());
    }
}
