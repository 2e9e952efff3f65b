//! Shared AST traversal helpers
//!
//! Two traversals are factored out here because the filter, join, and
//! having extractors differ only in which leaf shapes they accept:
//! [`for_each_select`] reaches every query block in a statement
//! (subqueries, CTEs, derived tables, set operations), and
//! [`walk_predicate`] flattens boolean connectives and parenthesization
//! before handing each leaf to the caller's recognizer.

use sqlparser::ast::{BinaryOperator, Expr, Query, Select, SetExpr, Statement, Visit, Visitor};
use std::ops::ControlFlow;

use crate::model::FilterOperator;

/// Invoke `on_select` for every query block anywhere in the statement.
///
/// Built on sqlparser's `Visitor`, which descends into subqueries in
/// expressions, CTEs, derived tables, and merge sources. Query blocks
/// nested directly inside a set operation are not separate `Query`
/// nodes, so those are unfolded by hand.
pub fn for_each_select<F: FnMut(&Select)>(statement: &Statement, on_select: F) {
    let mut walker = SelectWalker { on_select };
    let _ = statement.visit(&mut walker);
}

struct SelectWalker<F> {
    on_select: F,
}

impl<F: FnMut(&Select)> Visitor for SelectWalker<F> {
    type Break = ();

    fn pre_visit_query(&mut self, query: &Query) -> ControlFlow<()> {
        unfold_set_expr(&query.body, &mut self.on_select);
        ControlFlow::Continue(())
    }
}

/// Recurse through set operations to the `Select` blocks at their
/// leaves. `SetExpr::Query` is skipped: the visitor fires for that
/// nested `Query` node on its own.
fn unfold_set_expr<F: FnMut(&Select)>(body: &SetExpr, on_select: &mut F) {
    match body {
        SetExpr::Select(select) => on_select(select),
        SetExpr::SetOperation { left, right, .. } => {
            unfold_set_expr(left, on_select);
            unfold_set_expr(right, on_select);
        }
        _ => {}
    }
}

/// Walk a boolean predicate, invoking `on_leaf` for every
/// non-connective, non-grouping node.
///
/// AND and OR are not distinguished; both fan out into their operands.
/// The leaf recognizer decides whether a node becomes a condition.
pub fn walk_predicate<'a, F: FnMut(&'a Expr)>(expr: &'a Expr, on_leaf: &mut F) {
    match expr {
        Expr::Nested(inner) => walk_predicate(inner, on_leaf),
        Expr::BinaryOp {
            left,
            op: BinaryOperator::And | BinaryOperator::Or,
            right,
        } => {
            walk_predicate(left, on_leaf);
            walk_predicate(right, on_leaf);
        }
        leaf => on_leaf(leaf),
    }
}

/// Map a sqlparser binary operator to the comparison vocabulary shared
/// by the filter, join, and having extractors.
pub fn comparison_operator(op: &BinaryOperator) -> Option<FilterOperator> {
    match op {
        BinaryOperator::Eq => Some(FilterOperator::Eq),
        BinaryOperator::Gt => Some(FilterOperator::Gt),
        BinaryOperator::GtEq => Some(FilterOperator::GtEq),
        BinaryOperator::Lt => Some(FilterOperator::Lt),
        BinaryOperator::LtEq => Some(FilterOperator::LtEq),
        BinaryOperator::NotEq => Some(FilterOperator::NotEq),
        _ => None,
    }
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
