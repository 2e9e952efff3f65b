//! Filter condition extraction from WHERE clauses

use sqlparser::ast::{Expr, Statement, UnaryOperator};
use std::collections::HashSet;

use crate::model::{FilterCondition, FilterOperator};
use crate::walk;

/// Canonical dedup key: first occurrence wins, order preserved.
type FilterKey = (String, FilterOperator, Vec<String>);

/// Extract every recognizable WHERE-clause predicate in the statement,
/// including those inside nested query blocks.
pub fn extract_filters(statement: &Statement) -> Vec<FilterCondition> {
    let mut conditions: Vec<FilterCondition> = Vec::new();
    let mut seen: HashSet<FilterKey> = HashSet::new();

    walk::for_each_select(statement, |select| {
        if let Some(predicate) = &select.selection {
            walk::walk_predicate(predicate, &mut |leaf| {
                recognize_filter(leaf, &mut conditions, &mut seen);
            });
        }
    });

    conditions
}

/// Leaf recognizer for filter predicates.
///
/// The match order is the authoritative precedence for the operator
/// catalogue; any leaf that matches no arm is silently ignored.
fn recognize_filter(
    leaf: &Expr,
    conditions: &mut Vec<FilterCondition>,
    seen: &mut HashSet<FilterKey>,
) {
    match leaf {
        Expr::BinaryOp { left, op, right } => {
            if let Some(operator) = walk::comparison_operator(op) {
                push_filter(
                    conditions,
                    seen,
                    left.to_string(),
                    operator,
                    vec![right.to_string()],
                );
            }
        }
        Expr::Like {
            negated: false,
            expr,
            pattern,
            ..
        } => {
            push_filter(
                conditions,
                seen,
                expr.to_string(),
                FilterOperator::Like,
                vec![pattern.to_string()],
            );
        }
        Expr::Between {
            expr,
            negated: false,
            low,
            high,
        } => {
            push_filter(
                conditions,
                seen,
                expr.to_string(),
                FilterOperator::Between,
                vec![low.to_string(), high.to_string()],
            );
        }
        Expr::InList {
            expr,
            list,
            negated,
        } => {
            let operator = if *negated {
                FilterOperator::NotIn
            } else {
                FilterOperator::In
            };
            let values = list.iter().map(Expr::to_string).collect();
            push_filter(conditions, seen, expr.to_string(), operator, values);
        }
        // Subquery membership carries no enumerable members; the
        // condition is still recorded, with an empty value list.
        Expr::InSubquery { expr, negated, .. } => {
            let operator = if *negated {
                FilterOperator::NotIn
            } else {
                FilterOperator::In
            };
            push_filter(conditions, seen, expr.to_string(), operator, Vec::new());
        }
        Expr::UnaryOp {
            op: UnaryOperator::Not,
            expr: inner,
        } => {
            if let Expr::InList {
                expr,
                list,
                negated: false,
            } = strip_nested(inner)
            {
                let values = list.iter().map(Expr::to_string).collect();
                push_filter(
                    conditions,
                    seen,
                    expr.to_string(),
                    FilterOperator::NotIn,
                    values,
                );
            }
        }
        Expr::IsNull(expr) => {
            push_filter(
                conditions,
                seen,
                expr.to_string(),
                FilterOperator::Is,
                vec!["NULL".to_string()],
            );
        }
        Expr::IsNotNull(expr) => {
            push_filter(
                conditions,
                seen,
                expr.to_string(),
                FilterOperator::Is,
                vec!["NOT NULL".to_string()],
            );
        }
        _ => {}
    }
}

/// Unwrap any number of parenthesization layers.
fn strip_nested(expr: &Expr) -> &Expr {
    let mut current = expr;
    while let Expr::Nested(inner) = current {
        current = inner;
    }
    current
}

fn push_filter(
    conditions: &mut Vec<FilterCondition>,
    seen: &mut HashSet<FilterKey>,
    column: String,
    operator: FilterOperator,
    values: Vec<String>,
) {
    let key = (column.clone(), operator, values.clone());
    if !seen.insert(key) {
        return;
    }
    conditions.push(FilterCondition {
        column,
        operator,
        values,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SqlParser;

    fn parse_and_extract(sql: &str) -> Vec<FilterCondition> {
        let parser = SqlParser::generic();
        let stmt = parser.parse_single(sql).unwrap();
        extract_filters(&stmt)
    }

    #[test]
    fn test_simple_comparison() {
        let filters = parse_and_extract("SELECT id, name FROM employees WHERE salary > 5000");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].column, "salary");
        assert_eq!(filters[0].operator, FilterOperator::Gt);
        assert_eq!(filters[0].values, vec!["5000"]);
    }

    #[test]
    fn test_and_fans_out() {
        let filters = parse_and_extract(
            "SELECT id FROM employees e WHERE e.salary > 5000 AND e.dept IN ('HR', 'ENG')",
        );
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].column, "e.salary");
        assert_eq!(filters[1].column, "e.dept");
        assert_eq!(filters[1].operator, FilterOperator::In);
        assert_eq!(filters[1].values, vec!["'HR'", "'ENG'"]);
    }

    #[test]
    fn test_or_fans_out() {
        let filters =
            parse_and_extract("SELECT id FROM t WHERE status = 'NEW' OR status = 'OPEN'");
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].values, vec!["'NEW'"]);
        assert_eq!(filters[1].values, vec!["'OPEN'"]);
    }

    #[test]
    fn test_between_orders_low_then_high() {
        let filters = parse_and_extract("SELECT id FROM t WHERE amount BETWEEN 10 AND 99");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].operator, FilterOperator::Between);
        assert_eq!(filters[0].values, vec!["10", "99"]);
    }

    #[test]
    fn test_not_in_list() {
        let filters = parse_and_extract("SELECT id FROM t WHERE grade NOT IN ('C', 'D')");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].operator, FilterOperator::NotIn);
        assert_eq!(filters[0].values, vec!["'C'", "'D'"]);
    }

    #[test]
    fn test_not_wrapping_parenthesized_in() {
        let filters = parse_and_extract("SELECT id FROM t WHERE NOT (grade IN ('C', 'D'))");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].operator, FilterOperator::NotIn);
        assert_eq!(filters[0].column, "grade");
    }

    #[test]
    fn test_is_null_and_is_not_null() {
        let filters =
            parse_and_extract("SELECT id FROM t WHERE closed_at IS NULL AND status IS NOT NULL");
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].operator, FilterOperator::Is);
        assert_eq!(filters[0].values, vec!["NULL"]);
        assert_eq!(filters[1].values, vec!["NOT NULL"]);
    }

    #[test]
    fn test_parenthesized_group_operators() {
        let filters = parse_and_extract(
            "SELECT id FROM employees e \
             WHERE (e.salary >= 5000 AND e.name LIKE 'E%') \
               AND e.status IS NOT NULL \
               AND e.grade NOT IN ('C', 'D')",
        );
        let operators: HashSet<FilterOperator> =
            filters.iter().map(|f| f.operator).collect();
        let expected: HashSet<FilterOperator> = [
            FilterOperator::GtEq,
            FilterOperator::Like,
            FilterOperator::Is,
            FilterOperator::NotIn,
        ]
        .into_iter()
        .collect();
        assert_eq!(operators, expected);
    }

    #[test]
    fn test_duplicate_predicate_deduplicated() {
        let filters =
            parse_and_extract("SELECT id FROM t WHERE salary > 5000 AND salary > 5000");
        assert_eq!(filters.len(), 1);
    }

    #[test]
    fn test_same_column_different_values_kept() {
        let filters = parse_and_extract("SELECT id FROM t WHERE x > 1 AND x > 2");
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn test_in_subquery_has_empty_values() {
        let filters =
            parse_and_extract("SELECT id FROM t WHERE id IN (SELECT user_id FROM orders)");
        // One condition from the outer IN; the subquery has no WHERE.
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].operator, FilterOperator::In);
        assert!(filters[0].values.is_empty());
    }

    #[test]
    fn test_nested_query_where_included() {
        let filters = parse_and_extract(
            "SELECT id FROM t WHERE id IN (SELECT user_id FROM orders WHERE total > 100)",
        );
        assert_eq!(filters.len(), 2);
        assert!(filters.iter().any(|f| f.column == "total"));
    }

    #[test]
    fn test_unrecognized_leaf_ignored() {
        let filters = parse_and_extract(
            "SELECT id FROM t WHERE EXISTS (SELECT 1 FROM other) AND x = 1",
        );
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].column, "x");
    }

    #[test]
    fn test_no_where_clause() {
        let filters = parse_and_extract("SELECT id FROM t");
        assert!(filters.is_empty());
    }
}
