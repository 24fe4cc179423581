// SPDX-License-Identifier: MPL-2.0

//! Property tests checking that the compiled conditions agree with the range
//! algebra: for every generated row, evaluating the condition must give the
//! same answer as the corresponding predicate on the row's own range.

use std::fmt;

use chrono::NaiveDate;
use proptest::prelude::*;

use calendar_ranges::{proptest_day_strategy, proptest_range_strategy, proptest_set_strategy};
use daterange::predicate::{ColumnValues, RangeColumns};
use daterange::sql::{QueryRenderer, SqlRenderer};
use daterange::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Start,
    End,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Start => write!(f, "start_date"),
            Column::End => write!(f, "end_date"),
        }
    }
}

/// A stored row with a valid boundary pair.
#[derive(Debug, Clone, Copy)]
struct Row {
    range: DateRange,
}

impl ColumnValues<Column> for Row {
    fn date(&self, column: &Column) -> Option<NaiveDate> {
        match column {
            Column::Start => self.range.start(),
            Column::End => self.range.end(),
        }
    }
}

fn row_strategy() -> impl Strategy<Value = Row> {
    proptest_range_strategy().prop_map(|range| Row { range })
}

fn columns() -> RangeColumns<Column> {
    RangeColumns::both(Column::Start, Column::End)
}

proptest! {

    #[test]
    fn overlap_condition_agrees_with_the_algebra(row in row_strategy(), query in proptest_range_strategy()) {
        let condition = columns().overlaps(&query);
        prop_assert_eq!(condition.matches(&row), row.range.overlaps(&query));
    }

    #[test]
    fn active_condition_agrees_with_the_algebra(row in row_strategy(), date in proptest_day_strategy()) {
        let condition = columns().active_on(date);
        prop_assert_eq!(condition.matches(&row), row.range.contains(date));
    }

    #[test]
    fn past_condition_agrees_with_the_algebra(row in row_strategy(), date in proptest_day_strategy()) {
        let condition = columns().past_on(date);
        prop_assert_eq!(condition.matches(&row), row.range.is_past(date));
    }

    #[test]
    fn future_condition_agrees_with_the_algebra(row in row_strategy(), date in proptest_day_strategy()) {
        let condition = columns().future_on(date);
        prop_assert_eq!(condition.matches(&row), row.range.is_future(date));
    }

    #[test]
    fn set_overlap_condition_agrees_with_the_algebra(row in row_strategy(), set in proptest_set_strategy()) {
        let condition = columns().set_overlaps(&set);
        prop_assert_eq!(condition.matches(&row), set.overlaps(&row.range));
    }

    #[test]
    fn negation_inverts_every_evaluation(row in row_strategy(), query in proptest_range_strategy()) {
        let condition = columns().overlaps(&query);
        prop_assert_eq!(condition.clone().not().matches(&row), !condition.matches(&row));
    }

    #[test]
    fn bindings_line_up_with_placeholders(set in proptest_set_strategy(), date in proptest_day_strategy()) {
        let condition = columns().set_overlaps(&set).or(columns().active_on(date).not());
        let query = SqlRenderer::render_condition(&condition);
        prop_assert_eq!(query.sql.matches('?').count(), query.bindings.len());
    }
}
