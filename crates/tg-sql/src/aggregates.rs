//! Aggregate extraction from select lists

use sqlparser::ast::{
    Expr, Function, FunctionArg, FunctionArguments, SelectItem, Statement,
};
use std::collections::HashSet;

use crate::model::AggregateCondition;
use crate::walk;

/// Closed catalogue of recognized aggregate function names. A call whose
/// uppercased base name is not listed here is never treated as an
/// aggregate, in the select list or in HAVING.
const AGGREGATE_FUNCTIONS: &[&str] = &[
    "AVG", "COUNT", "LISTAGG", "MAX", "MEDIAN", "MIN", "STDDEV", "SUM", "VARIANCE",
];

/// Extract every aggregate call from every query block's select list.
///
/// One level of aliasing is unwrapped to reach the underlying
/// expression; calls without an argument expression are skipped.
pub fn extract_aggregates(statement: &Statement) -> Vec<AggregateCondition> {
    let mut aggregates: Vec<AggregateCondition> = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    walk::for_each_select(statement, |select| {
        for item in &select.projection {
            let expr = match item {
                SelectItem::UnnamedExpr(expr) => expr,
                SelectItem::ExprWithAlias { expr, .. } => expr,
                _ => continue,
            };
            let Expr::Function(func) = expr else {
                continue;
            };
            let Some(function) = aggregate_function_name(func) else {
                continue;
            };
            let Some(column) = first_argument(func) else {
                continue;
            };

            let key = (function.clone(), column.clone());
            if !seen.insert(key) {
                continue;
            }
            aggregates.push(AggregateCondition { function, column });
        }
    });

    aggregates
}

/// Uppercased function name, if the call is a recognized aggregate.
///
/// Window invocations (`OVER`) of non-aggregate functions fall out here:
/// `ROW_NUMBER() OVER (...)` is not in the catalogue.
pub(crate) fn aggregate_function_name(func: &Function) -> Option<String> {
    let name = func.name.to_string().to_uppercase();
    if AGGREGATE_FUNCTIONS.contains(&name.as_str()) {
        Some(name)
    } else {
        None
    }
}

/// Canonical rendering of the call's first argument. `*` counts as an
/// argument, so `COUNT(*)` yields `*`; argument-less calls yield None.
pub(crate) fn first_argument(func: &Function) -> Option<String> {
    let FunctionArguments::List(list) = &func.args else {
        return None;
    };
    let arg = list.args.first()?;
    match arg {
        FunctionArg::Unnamed(arg_expr) => Some(arg_expr.to_string()),
        FunctionArg::Named { arg: arg_expr, .. }
        | FunctionArg::ExprNamed { arg: arg_expr, .. } => Some(arg_expr.to_string()),
    }
}
