// SPDX-License-Identifier: MPL-2.0

//! Date ranges attached to records, and query predicates over them.
//!
//! Records — memberships, prices, contracts, publications — are often valid
//! for a period of calendar days with an optional start and an optional end.
//! This crate models that period as a [`DateRange`], collections of periods
//! as a normalized [`DateRangeSet`], and provides the predicates such records
//! are queried with: does a range overlap another, is a record active on a
//! date, is it already past or still future.
//!
//! All boundaries are inclusive whole calendar days. An absent boundary means
//! the range is unbounded on that side, so `[2024-01-01, ∞)` is a range that
//! started and never ends, and a record with neither date is valid forever.
//! Reference dates are always passed in; nothing here reads a clock.
//!
//! # Ranges and sets
//!
//! ```
//! use chrono::NaiveDate;
//! use daterange::{DateRange, DateRangeSet};
//!
//! fn day(year: i32, month: u32, day: u32) -> NaiveDate {
//!     NaiveDate::from_ymd_opt(year, month, day).unwrap()
//! }
//!
//! let january = DateRange::between(day(2024, 1, 1), day(2024, 1, 31)).unwrap();
//! let february = DateRange::between(day(2024, 2, 1), day(2024, 2, 29)).unwrap();
//! let june = DateRange::between(day(2024, 6, 1), day(2024, 6, 30)).unwrap();
//!
//! // January and February leave no day uncovered between them, so the
//! // normalized set merges them into a single range.
//! let set = DateRangeSet::new([february, june, january]);
//! assert_eq!(set.ranges().len(), 2);
//! assert!(set.contains(day(2024, 2, 14)));
//! assert!(!set.contains(day(2024, 3, 1)));
//! ```
//!
//! # Attaching a range to a record
//!
//! A persisted record exposes its boundary pair through the
//! [`DateRanged`](record::DateRanged) trait; classification and validation
//! come for free. [`InMemoryRecords`](record::InMemoryRecords) is a
//! database-free collection of such records that validates on insert and
//! answers the same queries a backend would.
//!
//! ```
//! use chrono::NaiveDate;
//! use daterange::error::DateRangeError;
//! use daterange::record::{DateRanged, InMemoryRecords};
//! use daterange::DateRange;
//!
//! struct Membership {
//!     start: Option<NaiveDate>,
//!     end: Option<NaiveDate>,
//! }
//!
//! impl DateRanged for Membership {
//!     fn boundary_pair(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
//!         (self.start, self.end)
//!     }
//!
//!     fn set_boundary_pair(
//!         &mut self,
//!         start: Option<NaiveDate>,
//!         end: Option<NaiveDate>,
//!     ) -> Result<(), DateRangeError> {
//!         DateRange::new(start, end)?;
//!         self.start = start;
//!         self.end = end;
//!         Ok(())
//!     }
//! }
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
//!
//! let mut records = InMemoryRecords::new();
//! records
//!     .insert(Membership { start: Some(day(1)), end: Some(day(10)) })
//!     .unwrap();
//! records
//!     .insert(Membership { start: Some(day(20)), end: None })
//!     .unwrap();
//!
//! assert_eq!(records.active_on(day(5)).count(), 1);
//! assert_eq!(records.future_on(day(5)).count(), 1);
//! assert_eq!(records.past_on(day(30)).count(), 1);
//! ```
//!
//! # Compiling query predicates
//!
//! A database backend evaluates the same predicates over its own columns.
//! Instead of one query method per predicate, negation and or-variant, the
//! [`predicate`] module compiles each predicate once into a
//! [`Condition`](predicate::Condition) tree over an abstract column
//! reference, and the [`sql`] module renders such trees as parameterized SQL:
//!
//! ```
//! use chrono::NaiveDate;
//! use daterange::predicate::RangeColumns;
//! use daterange::sql::{QueryRenderer, SqlRenderer};
//! use daterange::DateRange;
//!
//! let columns = RangeColumns::both("start_date", "end_date");
//! let range = DateRange::between(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//! )
//! .unwrap();
//!
//! let query = SqlRenderer::render_condition(&columns.overlaps(&range));
//! assert_eq!(
//!     query.sql,
//!     "((start_date <= ? OR start_date IS NULL) AND (end_date >= ? OR end_date IS NULL))"
//! );
//! assert_eq!(query.bindings.len(), 2);
//! ```
//!
//! A `NULL` column is an unbounded side, so every comparison is rendered with
//! its `IS NULL` escape; the compiled conditions match the in-memory
//! predicates row for row, which the crate's property tests exercise.

#![warn(missing_docs)]

pub mod error;
pub mod predicate;
pub mod record;
pub mod sql;

pub use calendar_ranges::{CalendarDay, DateRange, DateRangeSet, InvalidRange};
