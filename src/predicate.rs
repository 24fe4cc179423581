// SPDX-License-Identifier: MPL-2.0

//! Compiling range predicates into backend-agnostic filter conditions.
//!
//! A query backend cannot call [`DateRange::overlaps`] on stored rows; it
//! needs the same boolean algebra expressed over its own columns. This module
//! compiles each predicate once, into a [`Condition`] tree over an abstract
//! column reference type, instead of hand-writing one query method per
//! predicate, negation and or-combination: negated and or-composed variants
//! come from the [`Condition`] combinators.
//!
//! The compiled conditions follow the algebra exactly:
//!  - an absent row boundary (a `NULL` column) never excludes a match on its
//!    side, so every comparison is paired with an `IS NULL` escape;
//!  - boundaries are inclusive, so touching ranges count as overlapping;
//!  - a [`DateRangeSet`] predicate is the OR of its member ranges'
//!    predicates, or a never-matching condition when the set is empty.
//!
//! [`Condition::matches`] evaluates a condition against an in-memory row,
//! which is the executable form of that contract: for every row, the rendered
//! backend filter and the algebra must agree with it.

use std::fmt;

use chrono::NaiveDate;

use crate::{DateRange, DateRangeSet};

/// Comparison operators available to backend conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Strictly before.
    Lt,
    /// On or before.
    Le,
    /// Strictly after.
    Gt,
    /// On or after.
    Ge,
}

impl CompareOp {
    /// Applies the comparison to two concrete dates.
    pub fn eval(self, left: NaiveDate, right: NaiveDate) -> bool {
        match self {
            CompareOp::Lt => left < right,
            CompareOp::Le => left <= right,
            CompareOp::Gt => left > right,
            CompareOp::Ge => left >= right,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Lt => write!(f, "<"),
            CompareOp::Le => write!(f, "<="),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::Ge => write!(f, ">="),
        }
    }
}

/// A filter condition over date columns, generic over the column reference
/// type `C`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition<C> {
    /// Matches every row.
    Always,
    /// Matches no row.
    Never,
    /// The column holds no date.
    IsNull(C),
    /// The column holds a date comparing as given. A `NULL` column never
    /// matches.
    Compare(C, CompareOp, NaiveDate),
    /// The inner condition does not match.
    Not(Box<Condition<C>>),
    /// Every inner condition matches.
    All(Vec<Condition<C>>),
    /// At least one inner condition matches.
    Any(Vec<Condition<C>>),
}

impl<C> Condition<C> {
    /// Both conditions must match.
    pub fn and(self, other: Condition<C>) -> Condition<C> {
        match (self, other) {
            (Condition::All(mut left), Condition::All(right)) => {
                left.extend(right);
                Condition::All(left)
            }
            (Condition::All(mut left), right) => {
                left.push(right);
                Condition::All(left)
            }
            (left, Condition::All(mut right)) => {
                right.insert(0, left);
                Condition::All(right)
            }
            (left, right) => Condition::All(vec![left, right]),
        }
    }

    /// Either condition must match.
    pub fn or(self, other: Condition<C>) -> Condition<C> {
        match (self, other) {
            (Condition::Any(mut left), Condition::Any(right)) => {
                left.extend(right);
                Condition::Any(left)
            }
            (Condition::Any(mut left), right) => {
                left.push(right);
                Condition::Any(left)
            }
            (left, Condition::Any(mut right)) => {
                right.insert(0, left);
                Condition::Any(right)
            }
            (left, right) => Condition::Any(vec![left, right]),
        }
    }

    /// The condition must not match.
    ///
    /// Negation here is plain boolean: the compiled conditions pair every
    /// comparison with its `IS NULL` escape, so they never take SQL's third
    /// truth value.
    pub fn not(self) -> Condition<C> {
        match self {
            Condition::Always => Condition::Never,
            Condition::Never => Condition::Always,
            Condition::Not(inner) => *inner,
            other => Condition::Not(Box::new(other)),
        }
    }

    /// Evaluates the condition against a single row.
    ///
    /// This is the reference semantics a rendered backend filter must
    /// reproduce. A `NULL` column fails any comparison and satisfies
    /// [`Condition::IsNull`].
    pub fn matches(&self, row: &impl ColumnValues<C>) -> bool {
        match self {
            Condition::Always => true,
            Condition::Never => false,
            Condition::IsNull(column) => row.date(column).is_none(),
            Condition::Compare(column, op, date) => {
                row.date(column).map_or(false, |value| op.eval(value, *date))
            }
            Condition::Not(inner) => !inner.matches(row),
            Condition::All(conditions) => conditions.iter().all(|c| c.matches(row)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.matches(row)),
        }
    }
}

/// Row-side lookup of a date column's value.
pub trait ColumnValues<C> {
    /// The date the row holds in the given column, [None] for `NULL`.
    fn date(&self, column: &C) -> Option<NaiveDate>;
}

impl<C, F> ColumnValues<C> for F
where
    F: Fn(&C) -> Option<NaiveDate>,
{
    fn date(&self, column: &C) -> Option<NaiveDate> {
        self(column)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// A single sort expression with its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey<C> {
    /// What to sort by.
    pub expr: SortExpr<C>,
    /// Which way to sort it.
    pub direction: Direction,
}

/// What a [`SortKey`] sorts by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortExpr<C> {
    /// The column's value.
    Column(C),
    /// Whether a condition holds, rows matching it ranking higher.
    Boolean(Condition<C>),
}

/// The date columns a record type maps its range onto.
///
/// Either side may be absent for record types that store only one boundary
/// (or none); the compiled conditions then constrain only the stored side,
/// exactly as the row-level predicates ignore a missing boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeColumns<C> {
    start: Option<C>,
    end: Option<C>,
}

impl<C: Clone> RangeColumns<C> {
    /// Column pair with either side possibly absent.
    pub fn new(start: Option<C>, end: Option<C>) -> Self {
        Self { start, end }
    }

    /// Column pair with both sides present.
    pub fn both(start: C, end: C) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// The start column, if the record type stores one.
    pub fn start(&self) -> Option<&C> {
        self.start.as_ref()
    }

    /// The end column, if the record type stores one.
    pub fn end(&self) -> Option<&C> {
        self.end.as_ref()
    }

    /// Rows whose range overlaps the given range.
    ///
    /// The start column must lie on or before the range's end and the end
    /// column on or after the range's start, a `NULL` column satisfying its
    /// side. Each conjunct is emitted only when its column and the opposing
    /// boundary are both present; with nothing to constrain, every row
    /// matches.
    pub fn overlaps(&self, range: &DateRange) -> Condition<C> {
        let mut conditions = Vec::new();

        if let (Some(column), Some(end)) = (&self.start, range.end()) {
            conditions.push(compare_or_null(column, CompareOp::Le, end));
        }

        if let (Some(column), Some(start)) = (&self.end, range.start()) {
            conditions.push(compare_or_null(column, CompareOp::Ge, start));
        }

        if conditions.is_empty() {
            Condition::Always
        } else {
            Condition::All(conditions)
        }
    }

    /// Rows active on the given date: the start column on or before it and
    /// the end column on or after it, a `NULL` column satisfying its side.
    pub fn active_on(&self, date: NaiveDate) -> Condition<C> {
        let mut conditions = Vec::new();

        if let Some(column) = &self.start {
            conditions.push(compare_or_null(column, CompareOp::Le, date));
        }

        if let Some(column) = &self.end {
            conditions.push(compare_or_null(column, CompareOp::Ge, date));
        }

        if conditions.is_empty() {
            Condition::Always
        } else {
            Condition::All(conditions)
        }
    }

    /// Rows past on the given date: the end column strictly before it.
    ///
    /// Without an end column no row can be past, so no row matches.
    pub fn past_on(&self, date: NaiveDate) -> Condition<C> {
        match &self.end {
            Some(column) => Condition::Compare(column.clone(), CompareOp::Lt, date),
            None => Condition::Never,
        }
    }

    /// Rows future on the given date: the start column strictly after it.
    ///
    /// Without a start column no row can be future, so no row matches.
    pub fn future_on(&self, date: NaiveDate) -> Condition<C> {
        match &self.start {
            Some(column) => Condition::Compare(column.clone(), CompareOp::Gt, date),
            None => Condition::Never,
        }
    }

    /// Rows whose range overlaps any range of the given set: the OR of the
    /// member ranges' overlap conditions, or a never-matching condition for
    /// the empty set.
    pub fn set_overlaps(&self, set: &DateRangeSet) -> Condition<C> {
        if set.is_empty() {
            Condition::Never
        } else {
            Condition::Any(set.iter().map(|range| self.overlaps(range)).collect())
        }
    }

    /// Sort keys ordering rows by their range: start column first, then end
    /// column, skipping sides the record type does not store.
    pub fn range_order(&self, direction: Direction) -> Vec<SortKey<C>> {
        let mut keys = Vec::new();

        if let Some(column) = &self.start {
            keys.push(SortKey {
                expr: SortExpr::Column(column.clone()),
                direction,
            });
        }

        if let Some(column) = &self.end {
            keys.push(SortKey {
                expr: SortExpr::Column(column.clone()),
                direction,
            });
        }

        keys
    }

    /// A sort key ranking rows by whether they are active on the given date.
    ///
    /// [`Direction::Desc`] puts active rows first. Empty when the record type
    /// stores no boundaries, since every row is then equally active.
    pub fn active_first(&self, date: NaiveDate, direction: Direction) -> Vec<SortKey<C>> {
        match self.active_on(date) {
            Condition::Always => Vec::new(),
            condition => vec![SortKey {
                expr: SortExpr::Boolean(condition),
                direction,
            }],
        }
    }
}

/// `column <op> date OR column IS NULL` — a boundary comparison with the
/// unbounded-side escape.
fn compare_or_null<C: Clone>(column: &C, op: CompareOp, date: NaiveDate) -> Condition<C> {
    Condition::Any(vec![
        Condition::Compare(column.clone(), op, date),
        Condition::IsNull(column.clone()),
    ])
}
