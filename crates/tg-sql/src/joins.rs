//! Join condition extraction from ON clauses and MERGE match predicates

use sqlparser::ast::{
    Expr, JoinConstraint, JoinOperator, Statement, TableFactor, TableWithJoins,
};
use std::collections::HashSet;

use crate::model::JoinCondition;
use crate::walk;

/// Dedup key, exactly as rendered. Deliberately directional: `a.x = b.y`
/// and `b.y = a.x` are distinct keys.
type JoinKey = (String, String);

/// Extract every join-match predicate in the statement: ON clauses of
/// every join in every query block, plus a MERGE statement's match
/// predicate.
pub fn extract_joins(statement: &Statement) -> Vec<JoinCondition> {
    let mut joins: Vec<JoinCondition> = Vec::new();
    let mut seen: HashSet<JoinKey> = HashSet::new();

    walk::for_each_select(statement, |select| {
        for table in &select.from {
            collect_table_joins(table, &mut joins, &mut seen);
        }
    });

    if let Statement::Merge(merge) = statement {
        walk::walk_predicate(&merge.on, &mut |leaf| {
            recognize_join(leaf, &mut joins, &mut seen);
        });
    }

    joins
}

fn collect_table_joins(
    table: &TableWithJoins,
    joins: &mut Vec<JoinCondition>,
    seen: &mut HashSet<JoinKey>,
) {
    if let TableFactor::NestedJoin {
        table_with_joins, ..
    } = &table.relation
    {
        collect_table_joins(table_with_joins, joins, seen);
    }

    for join in &table.joins {
        if let Some(on_expr) = join_on_expr(&join.join_operator) {
            walk::walk_predicate(on_expr, &mut |leaf| {
                recognize_join(leaf, joins, seen);
            });
        }
        if let TableFactor::NestedJoin {
            table_with_joins, ..
        } = &join.relation
        {
            collect_table_joins(table_with_joins, joins, seen);
        }
    }
}

/// Extract the ON expression from a join operator, if present.
fn join_on_expr(op: &JoinOperator) -> Option<&Expr> {
    let constraint = match op {
        JoinOperator::Join(c)
        | JoinOperator::Inner(c)
        | JoinOperator::Left(c)
        | JoinOperator::LeftOuter(c)
        | JoinOperator::Right(c)
        | JoinOperator::RightOuter(c)
        | JoinOperator::FullOuter(c) => Some(c),
        _ => None,
    };
    match constraint {
        Some(JoinConstraint::On(expr)) => Some(expr),
        _ => None,
    }
}

/// Leaf recognizer for join predicates: any binary comparison whose
/// renderings are non-empty and where at least one side is
/// table-qualified. The qualification guard keeps literal comparisons
/// that happen to sit in an ON clause (`ON 1 = 1`) out of the model.
fn recognize_join(leaf: &Expr, joins: &mut Vec<JoinCondition>, seen: &mut HashSet<JoinKey>) {
    let Expr::BinaryOp { left, op, right } = leaf else {
        return;
    };
    if walk::comparison_operator(op).is_none() {
        return;
    }

    let left_column = left.to_string();
    let right_column = right.to_string();
    if left_column.is_empty() || right_column.is_empty() {
        return;
    }
    if !left_column.contains('.') && !right_column.contains('.') {
        return;
    }

    let key = (left_column.clone(), right_column.clone());
    if !seen.insert(key) {
        return;
    }
    joins.push(JoinCondition {
        left_column,
        right_column,
    });
}
