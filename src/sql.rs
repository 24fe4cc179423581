// SPDX-License-Identifier: MPL-2.0

//! Rendering compiled conditions into a query backend's language.
//!
//! The conditions built by [`RangeColumns`](crate::predicate::RangeColumns)
//! are backend-agnostic trees; a [`QueryRenderer`] turns them into whatever a
//! concrete backend consumes. [`SqlRenderer`] is the provided implementation,
//! producing SQL text with positional `?` placeholders and the matching
//! binding list, so dates are never spliced into the statement.

use std::fmt;

use chrono::NaiveDate;

use crate::predicate::{Condition, Direction, SortExpr, SortKey};

/// Trait for translating compiled conditions into a backend filter language.
pub trait QueryRenderer<C> {
    /// Type of the rendered output.
    type Output;

    /// Renders a filter condition.
    fn render_condition(condition: &Condition<C>) -> Self::Output;

    /// Renders an ordering over the given sort keys.
    fn render_sort(keys: &[SortKey<C>]) -> Self::Output;
}

/// A rendered SQL fragment with its positional bindings.
///
/// Bindings appear in the same order as their `?` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlQuery {
    /// The SQL text.
    pub sql: String,
    /// The dates bound to the placeholders, in placeholder order.
    pub bindings: Vec<NaiveDate>,
}

impl fmt::Display for SqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql)
    }
}

/// Renders conditions as parameterized SQL `WHERE` and `ORDER BY` fragments.
///
/// Conditions with nothing to constrain render as the `1 = 1` / `1 = 0`
/// tautologies, so the fragment stays composable inside a larger `WHERE`
/// clause.
pub struct SqlRenderer;

impl SqlRenderer {
    fn write_condition<C: fmt::Display>(
        condition: &Condition<C>,
        sql: &mut String,
        bindings: &mut Vec<NaiveDate>,
    ) {
        match condition {
            Condition::Always => sql.push_str("1 = 1"),
            Condition::Never => sql.push_str("1 = 0"),
            Condition::IsNull(column) => {
                sql.push_str(&format!("{column} IS NULL"));
            }
            Condition::Compare(column, op, date) => {
                sql.push_str(&format!("{column} {op} ?"));
                bindings.push(*date);
            }
            Condition::Not(inner) => {
                sql.push_str("NOT (");
                Self::write_condition(inner, sql, bindings);
                sql.push(')');
            }
            Condition::All(conditions) => {
                Self::write_group(conditions, " AND ", Condition::Always, sql, bindings);
            }
            Condition::Any(conditions) => {
                Self::write_group(conditions, " OR ", Condition::Never, sql, bindings);
            }
        }
    }

    fn write_group<C: fmt::Display>(
        conditions: &[Condition<C>],
        separator: &str,
        identity: Condition<C>,
        sql: &mut String,
        bindings: &mut Vec<NaiveDate>,
    ) {
        if conditions.is_empty() {
            Self::write_condition(&identity, sql, bindings);
            return;
        }

        sql.push('(');
        for (idx, condition) in conditions.iter().enumerate() {
            if idx > 0 {
                sql.push_str(separator);
            }
            Self::write_condition(condition, sql, bindings);
        }
        sql.push(')');
    }

    fn direction_keyword(direction: Direction) -> &'static str {
        match direction {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl<C: fmt::Display> QueryRenderer<C> for SqlRenderer {
    type Output = SqlQuery;

    fn render_condition(condition: &Condition<C>) -> SqlQuery {
        let mut sql = String::new();
        let mut bindings = Vec::new();
        Self::write_condition(condition, &mut sql, &mut bindings);
        log::debug!("rendered condition `{sql}` with {} binding(s)", bindings.len());
        SqlQuery { sql, bindings }
    }

    fn render_sort(keys: &[SortKey<C>]) -> SqlQuery {
        let mut sql = String::new();
        let mut bindings = Vec::new();

        for (idx, key) in keys.iter().enumerate() {
            sql.push_str(if idx == 0 { "ORDER BY " } else { ", " });
            match &key.expr {
                SortExpr::Column(column) => {
                    sql.push_str(&column.to_string());
                }
                SortExpr::Boolean(condition) => {
                    sql.push_str("CASE WHEN ");
                    Self::write_condition(condition, &mut sql, &mut bindings);
                    sql.push_str(" THEN 1 ELSE 0 END");
                }
            }
            sql.push(' ');
            sql.push_str(Self::direction_keyword(key.direction));
        }

        log::debug!("rendered ordering `{sql}` with {} binding(s)", bindings.len());
        SqlQuery { sql, bindings }
    }
}
