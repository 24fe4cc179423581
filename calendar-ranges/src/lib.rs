// SPDX-License-Identifier: MPL-2.0

//! This crate contains the calendar-day interval types the `daterange` crate
//! builds its record predicates on.
//!
//! A [`DateRange`] is a single interval of calendar days with inclusive,
//! independently optional boundaries: an absent start means "unbounded in the
//! past", an absent end means "unbounded in the future", and both absent means
//! "covers all time". A [`DateRangeSet`] is an ordered list of such ranges,
//! normalized on construction so that its members are sorted, pairwise
//! disjoint and non-adjacent.
//!
//! You can construct a basic range from one of the following building blocks:
//!  - [full()](DateRange::full): every day
//!  - [single_day(d)](DateRange::single_day): only the day d
//!  - [starting_at(d)](DateRange::starting_at): all days `d <= days`
//!  - [ending_at(d)](DateRange::ending_at): all days `days <= d`
//!  - [between(d1, d2)](DateRange::between): all days `d1 <= days <= d2`
//!  - [new(start, end)](DateRange::new): the general form over two optional
//!    days, failing with [`InvalidRange`] when `start > end`
//!
//! All boundaries are whole calendar days. Sources that carry a time of day
//! ([`NaiveDateTime`], [`DateTime`]) are truncated through the
//! [`CalendarDay`] conversion before they ever become a boundary, so no
//! operation in this crate is time-of-day-sensitive.
//!
//! Because boundaries are inclusive at day granularity, two ranges that touch
//! on a boundary day overlap, and two ranges separated by less than one full
//! uncovered day are merged when a set is normalized: `[1, 5]` and `[6, 10]`
//! become `[1, 10]`.
//!
//! ## Optional features
//!
//! * `serde`: serialization and deserialization; deserialized ranges are
//!   re-validated and deserialized sets re-normalized.
//! * `proptest`: exports proptest strategies for days, ranges and sets.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
#[cfg(any(feature = "proptest", test))]
use proptest::prelude::*;
use smallvec::SmallVec;
use thiserror::Error;

/// Error returned when a range would start after it ends.
///
/// Boundaries are never clamped or swapped; an inverted pair is a caller bug
/// and must surface as an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("start date {start} is after end date {end}")]
pub struct InvalidRange {
    /// The offending start date.
    pub start: NaiveDate,
    /// The end date it was compared against.
    pub end: NaiveDate,
}

/// Conversion of a date-like value to the calendar day it falls on.
///
/// This is the single place where time-of-day information is discarded.
/// Implementations exist for [`NaiveDate`] (identity), [`NaiveDateTime`] and
/// [`DateTime`] in any time zone (the civil date in that zone).
pub trait CalendarDay {
    /// The calendar day this value falls on.
    fn calendar_day(self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(self) -> NaiveDate {
        self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(self) -> NaiveDate {
        self.date_naive()
    }
}

/// A single interval of calendar days with inclusive, optionally absent
/// boundaries.
///
/// Invariant: when both boundaries are present, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Builds a range from two optional days.
    ///
    /// Fails with [`InvalidRange`] when both are present and `start > end`.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, InvalidRange> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(InvalidRange { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// The range covering every day.
    pub fn full() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// All days from `start` on, unbounded in the future.
    pub fn starting_at(start: impl CalendarDay) -> Self {
        Self {
            start: Some(start.calendar_day()),
            end: None,
        }
    }

    /// All days up to and including `end`, unbounded in the past.
    pub fn ending_at(end: impl CalendarDay) -> Self {
        Self {
            start: None,
            end: Some(end.calendar_day()),
        }
    }

    /// All days from `start` through `end`, both included.
    pub fn between(start: impl CalendarDay, end: impl CalendarDay) -> Result<Self, InvalidRange> {
        Self::new(Some(start.calendar_day()), Some(end.calendar_day()))
    }

    /// The range covering exactly one day.
    pub fn single_day(day: impl CalendarDay) -> Self {
        let day = day.calendar_day();
        Self {
            start: Some(day),
            end: Some(day),
        }
    }

    /// The inclusive start day, [None] when unbounded in the past.
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// The inclusive end day, [None] when unbounded in the future.
    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns true if the two ranges share at least one day.
    ///
    /// Boundary equality counts: `[1, 5]` and `[5, 10]` overlap on day 5. An
    /// absent boundary never excludes an overlap on its side, so the fully
    /// unbounded range overlaps everything. Symmetric.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        starts_on_or_before(self.start, other.end) && starts_on_or_before(other.start, self.end)
    }

    /// Returns true if `date` falls within the range, boundaries included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start)
            && self.end.map_or(true, |end| date <= end)
    }

    /// Returns true if the range lies entirely before `date`.
    ///
    /// A range without an end is never past.
    pub fn is_past(&self, date: NaiveDate) -> bool {
        self.end.map_or(false, |end| date > end)
    }

    /// Returns true if the range lies entirely after `date`.
    ///
    /// A range without a start is never future.
    pub fn is_future(&self, date: NaiveDate) -> bool {
        self.start.map_or(false, |start| date < start)
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    /// Ranges order primarily by start, secondarily by end. An absent start
    /// sorts before any concrete start; an absent end sorts after any
    /// concrete end.
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_starts(self.start, other.start).then_with(|| cmp_ends(self.end, other.end))
    }
}

/// Ordering of two start boundaries, where [None] is `-∞`.
fn cmp_starts(left: Option<NaiveDate>, right: Option<NaiveDate>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => left.cmp(&right),
    }
}

/// Ordering of two end boundaries, where [None] is `+∞`.
fn cmp_ends(left: Option<NaiveDate>, right: Option<NaiveDate>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => left.cmp(&right),
    }
}

/// Whether a range starting at `start` can reach a range ending at `end`,
/// i.e. `start <= end` with either side absent counting as unbounded.
fn starts_on_or_before(start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    match (start, end) {
        (Some(start), Some(end)) => start <= end,
        _ => true,
    }
}

/// The end of one range leaves at least one uncovered day before the start of
/// the next, so the two cannot be merged into a single range.
///
/// ```text
/// True for these two:
///  [----]
///              [-----]
///       ^ end  ^ start
/// False for these two (they touch or leave no day uncovered):
///  [----]
///        [-----]
/// ```
///
/// With inclusive day-granular boundaries that means `start > end + 1 day`.
/// An absent boundary on either side always connects.
fn separated_by_gap(end: Option<NaiveDate>, start: Option<NaiveDate>) -> bool {
    match (end, start) {
        (Some(end), Some(start)) => match end.succ_opt() {
            Some(day_after_end) => start > day_after_end,
            // `end` is the last representable day, nothing can start later.
            None => false,
        },
        _ => false,
    }
}

/// The later of two end boundaries, an absent end dominating any concrete one.
fn merged_end(left: Option<NaiveDate>, right: Option<NaiveDate>) -> Option<NaiveDate> {
    match (left, right) {
        (Some(left), Some(right)) => Some(left.max(right)),
        _ => None,
    }
}

/// The ordering of a day wrt a range.
/// ```text
///      |-------|
///   ^      ^      ^
///   less   equal  greater
/// ```
fn within_bounds(date: NaiveDate, range: &DateRange) -> Ordering {
    if range.start.map_or(false, |start| date < start) {
        return Ordering::Less;
    }
    if range.end.map_or(true, |end| date <= end) {
        return Ordering::Equal;
    }
    Ordering::Greater
}

/// A normalized collection of [`DateRange`]s: sorted ascending, pairwise
/// disjoint and non-adjacent.
///
/// The empty set covers nothing; a set holding one fully unbounded range
/// covers everything. Normalization happens once at construction, after which
/// the set is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DateRangeSet {
    /// A single inline range covers the common case of a record's own range.
    ranges: SmallVec<[DateRange; 1]>,
}

impl DateRangeSet {
    /// Builds a normalized set from arbitrary ranges.
    ///
    /// The input may be unordered and contain duplicates or overlapping and
    /// adjacent ranges; the result is the minimal equivalent list of disjoint
    /// ranges. Two ranges are merged when they overlap or when no uncovered
    /// day lies between them (`[1, 5]` and `[6, 10]` become `[1, 10]`).
    pub fn new(ranges: impl IntoIterator<Item = DateRange>) -> Self {
        let mut input: SmallVec<[DateRange; 1]> = ranges.into_iter().collect();
        input.sort_unstable();

        let mut merged: SmallVec<[DateRange; 1]> = SmallVec::new();
        for next in input {
            match merged.last_mut() {
                Some(current) if !separated_by_gap(current.end, next.start) => {
                    current.end = merged_end(current.end, next.end);
                }
                _ => merged.push(next),
            }
        }

        Self { ranges: merged }.check_invariants()
    }

    /// The set covering no day at all.
    pub fn empty() -> Self {
        Self {
            ranges: SmallVec::new(),
        }
    }

    /// The set covering every day.
    pub fn full() -> Self {
        Self::new([DateRange::full()])
    }

    /// Whether the set covers no day at all.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of disjoint ranges in the normalized set.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// The normalized ranges, sorted ascending.
    pub fn ranges(&self) -> &[DateRange] {
        &self.ranges
    }

    /// Iterate over the normalized ranges.
    pub fn iter(&self) -> impl Iterator<Item = &DateRange> {
        self.ranges.iter()
    }

    /// Returns true if any member range contains `date`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.ranges
            .binary_search_by(|range| {
                // Reversed because we need the range wrt the day, while
                // within_bounds gives the day wrt the range.
                within_bounds(date, range).reverse()
            })
            .is_ok()
    }

    /// Returns true if any member range overlaps `range`.
    ///
    /// Stops at the first match.
    pub fn overlaps(&self, range: &DateRange) -> bool {
        self.ranges.iter().any(|member| member.overlaps(range))
    }

    /// Returns true if any pair of ranges across the two sets overlap.
    ///
    /// A single scan over both sorted lists, advancing whichever side ends
    /// first; the remaining elements of the longer side cannot reach back.
    pub fn overlaps_set(&self, other: &DateRangeSet) -> bool {
        let mut left_iter = self.ranges.iter().peekable();
        let mut right_iter = other.ranges.iter().peekable();

        while let Some((left, right)) = left_iter.peek().zip(right_iter.peek()) {
            if ends_before(left, right) {
                left_iter.next();
            } else if ends_before(right, left) {
                right_iter.next();
            } else {
                return true;
            }
        }

        false
    }

    /// The set covering every day covered by either input.
    pub fn union(&self, other: &DateRangeSet) -> DateRangeSet {
        Self::new(self.iter().chain(other.iter()).copied())
    }

    fn check_invariants(self) -> Self {
        if cfg!(debug_assertions) {
            for pair in self.ranges.windows(2) {
                assert!(separated_by_gap(pair[0].end, pair[1].start));
            }
            for range in self.ranges.iter() {
                assert!(starts_on_or_before(range.start, range.end));
            }
        }
        self
    }
}

/// The whole of `left` lies strictly before `right` begins.
fn ends_before(left: &DateRange, right: &DateRange) -> bool {
    match (left.end, right.start) {
        (Some(end), Some(start)) => end < start,
        _ => false,
    }
}

impl FromIterator<DateRange> for DateRangeSet {
    fn from_iter<I: IntoIterator<Item = DateRange>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a DateRangeSet {
    type Item = &'a DateRange;
    type IntoIter = std::slice::Iter<'a, DateRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

// REPORT ######################################################################

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.start, self.end) {
            (None, None) => write!(f, "*"),
            (Some(start), None) => write!(f, ">={start}"),
            (None, Some(end)) => write!(f, "<={end}"),
            (Some(start), Some(end)) => {
                if start == end {
                    write!(f, "{start}")
                } else {
                    write!(f, ">={start}, <={end}")
                }
            }
        }
    }
}

impl Display for DateRangeSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.ranges.is_empty() {
            write!(f, "∅")?;
        } else {
            for (idx, range) in self.ranges.iter().enumerate() {
                if idx > 0 {
                    write!(f, " | ")?;
                }
                write!(f, "{range}")?;
            }
        }
        Ok(())
    }
}

// SERIALIZATION ###############################################################

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct RawRange {
            start: Option<NaiveDate>,
            end: Option<NaiveDate>,
        }

        let raw = RawRange::deserialize(deserializer)?;
        DateRange::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateRangeSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Serialized sets are already normalized, but nothing stops a caller
        // from editing the serialized form, so normalize again.
        let ranges: Vec<DateRange> = serde::Deserialize::deserialize(deserializer)?;
        Ok(DateRangeSet::new(ranges))
    }
}

// PROPTEST ####################################################################

#[cfg(any(feature = "proptest", test))]
fn strategy_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("fixed calendar date")
}

/// Generate days within a century of the strategy epoch.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_day_strategy() -> impl Strategy<Value = NaiveDate> {
    (-36_500i64..=36_500).prop_map(|offset| strategy_epoch() + chrono::Duration::days(offset))
}

/// Generate ranges with independently absent boundaries, swapping inverted
/// pairs rather than discarding them.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_range_strategy() -> impl Strategy<Value = DateRange> {
    (
        prop::option::of(proptest_day_strategy()),
        prop::option::of(proptest_day_strategy()),
    )
        .prop_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) if a > b => DateRange {
                start: Some(b),
                end: Some(a),
            },
            (start, end) => DateRange { start, end },
        })
}

/// Generate normalized sets from up to eight arbitrary ranges.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_set_strategy() -> impl Strategy<Value = DateRangeSet> {
    prop::collection::vec(proptest_range_strategy(), 0..8).prop_map(DateRangeSet::new)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// The strategy epoch shifted by `offset` days.
    fn day(offset: i64) -> NaiveDate {
        strategy_epoch() + chrono::Duration::days(offset)
    }

    fn bounded(start: i64, end: i64) -> DateRange {
        DateRange::between(day(start), day(end)).unwrap()
    }

    proptest! {

        // Testing overlap ---------------------------------

        #[test]
        fn overlap_is_symmetric(a in proptest_range_strategy(), b in proptest_range_strategy()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn full_overlaps_everything(range in proptest_range_strategy()) {
            prop_assert!(DateRange::full().overlaps(&range));
        }

        #[test]
        fn overlapping_ranges_share_a_day(a in proptest_range_strategy(), b in proptest_range_strategy()) {
            if a.overlaps(&b) {
                let later_start = a.start().into_iter().chain(b.start()).max();
                let earlier_end = a.end().into_iter().chain(b.end()).min();
                let witness = later_start.or(earlier_end).unwrap_or_else(|| day(0));
                prop_assert!(a.contains(witness) && b.contains(witness));
            }
        }

        // Testing the classification triad ----------------

        #[test]
        fn exactly_one_of_future_active_past(range in proptest_range_strategy(), date in proptest_day_strategy()) {
            let classifications =
                [range.is_future(date), range.contains(date), range.is_past(date)];
            prop_assert_eq!(classifications.iter().filter(|&&held| held).count(), 1);
        }

        #[test]
        fn unbounded_end_is_never_past(start in prop::option::of(proptest_day_strategy()), date in proptest_day_strategy()) {
            let range = DateRange::new(start, None).unwrap();
            prop_assert!(!range.is_past(date));
        }

        #[test]
        fn unbounded_start_is_never_future(end in prop::option::of(proptest_day_strategy()), date in proptest_day_strategy()) {
            let range = DateRange::new(None, end).unwrap();
            prop_assert!(!range.is_future(date));
        }

        // Testing normalization ---------------------------

        #[test]
        fn normalization_is_idempotent(set in proptest_set_strategy()) {
            prop_assert_eq!(DateRangeSet::new(set.ranges().iter().copied()), set);
        }

        #[test]
        fn normalized_ranges_keep_every_day(
            ranges in prop::collection::vec(proptest_range_strategy(), 0..8),
            date in proptest_day_strategy(),
        ) {
            let covered = ranges.iter().any(|range| range.contains(date));
            let set = DateRangeSet::new(ranges);
            prop_assert_eq!(set.contains(date), covered);
        }

        #[test]
        fn set_contains_matches_members(set in proptest_set_strategy(), date in proptest_day_strategy()) {
            let by_members = set.ranges().iter().any(|range| range.contains(date));
            prop_assert_eq!(set.contains(date), by_members);
        }

        // Testing union -----------------------------------

        #[test]
        fn union_contains_either(a in proptest_set_strategy(), b in proptest_set_strategy(), date in proptest_day_strategy()) {
            prop_assert_eq!(a.union(&b).contains(date), a.contains(date) || b.contains(date));
        }

        #[test]
        fn union_is_symmetric(a in proptest_set_strategy(), b in proptest_set_strategy()) {
            prop_assert_eq!(a.union(&b), b.union(&a));
        }

        // Testing set overlap -----------------------------

        #[test]
        fn set_overlap_scan_matches_pairwise(a in proptest_set_strategy(), b in proptest_set_strategy()) {
            let pairwise = a
                .ranges()
                .iter()
                .any(|left| b.ranges().iter().any(|right| left.overlaps(right)));
            prop_assert_eq!(a.overlaps_set(&b), pairwise);
        }

        #[test]
        fn range_overlap_matches_singleton_set(set in proptest_set_strategy(), range in proptest_range_strategy()) {
            prop_assert_eq!(set.overlaps(&range), set.overlaps_set(&DateRangeSet::new([range])));
        }

        // Testing serde -----------------------------------

        #[cfg(feature = "serde")]
        #[test]
        fn serde_round_trip(set in proptest_set_strategy()) {
            let serialized = serde_json::to_string(&set).unwrap();
            let deserialized: DateRangeSet = serde_json::from_str(&serialized).unwrap();
            prop_assert_eq!(set, deserialized);
        }
    }

    #[test]
    fn new_rejects_inverted_boundaries() {
        let err = DateRange::new(Some(day(10)), Some(day(1))).unwrap_err();
        assert_eq!(
            err,
            InvalidRange {
                start: day(10),
                end: day(1),
            }
        );
    }

    #[test]
    fn boundary_equality_is_valid() {
        let range = DateRange::new(Some(day(3)), Some(day(3))).unwrap();
        assert_eq!(range, DateRange::single_day(day(3)));
    }

    #[test]
    fn datetime_sources_are_truncated() {
        let start = day(5).and_hms_opt(14, 30, 59).unwrap();
        let end = day(7).and_hms_opt(9, 0, 0).unwrap();
        let range = DateRange::between(start, end).unwrap();
        assert_eq!(range.start(), Some(day(5)));
        assert_eq!(range.end(), Some(day(7)));
    }

    #[test]
    fn touching_boundaries_overlap() {
        assert!(bounded(1, 5).overlaps(&bounded(5, 10)));
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        assert!(!bounded(1, 4).overlaps(&bounded(5, 10)));
    }

    #[test]
    fn contains_is_inclusive() {
        let range = bounded(1, 10);
        assert!(!range.contains(day(0)));
        assert!(range.contains(day(1)));
        assert!(range.contains(day(10)));
        assert!(!range.contains(day(11)));
    }

    #[test]
    fn triad_on_bounded_range() {
        let range = bounded(5, 10);
        assert!(range.is_future(day(4)));
        assert!(range.contains(day(5)));
        assert!(range.contains(day(10)));
        assert!(range.is_past(day(11)));
        assert!(!range.is_future(day(5)));
        assert!(!range.is_past(day(10)));
    }

    #[test]
    fn range_ord() {
        let ranges = [
            DateRange::ending_at(day(4)),
            DateRange::full(),
            DateRange::new(Some(day(1)), Some(day(3))).unwrap(),
            DateRange::new(Some(day(1)), Some(day(8))).unwrap(),
            DateRange::starting_at(day(1)),
            DateRange::single_day(day(2)),
        ];

        let mut sorted = ranges.to_vec();
        sorted.sort();
        assert_eq!(sorted, ranges);

        // Check that the sorting isn't just stable because we're returning equal.
        let mut reverse_sorted = ranges.to_vec();
        reverse_sorted.reverse();
        reverse_sorted.sort();
        assert_eq!(reverse_sorted, ranges);
    }

    #[test]
    fn overlapping_input_is_merged() {
        let set = DateRangeSet::new([bounded(1, 5), bounded(3, 8), bounded(20, 25)]);
        assert_eq!(set.ranges(), &[bounded(1, 8), bounded(20, 25)]);
    }

    #[test]
    fn one_day_gap_is_merged() {
        let set = DateRangeSet::new([bounded(1, 5), bounded(6, 10)]);
        assert_eq!(set.ranges(), &[bounded(1, 10)]);
    }

    #[test]
    fn two_day_gap_stays_separate() {
        let set = DateRangeSet::new([bounded(1, 5), bounded(7, 10)]);
        assert_eq!(set.ranges(), &[bounded(1, 5), bounded(7, 10)]);
    }

    #[test]
    fn unbounded_end_dominates_merge() {
        let set = DateRangeSet::new([DateRange::starting_at(day(1)), bounded(3, 8)]);
        assert_eq!(set.ranges(), &[DateRange::starting_at(day(1))]);
    }

    #[test]
    fn duplicates_collapse() {
        let set = DateRangeSet::new([bounded(1, 5), bounded(1, 5)]);
        assert_eq!(set.ranges(), &[bounded(1, 5)]);
    }

    #[test]
    fn empty_set_covers_nothing() {
        let set = DateRangeSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(day(0)));
        assert!(!set.overlaps(&DateRange::full()));
        assert_eq!(set.to_string(), "∅");
    }

    #[test]
    fn full_set_covers_everything() {
        let set = DateRangeSet::full();
        assert!(!set.is_empty());
        assert!(set.contains(day(-36_500)));
        assert_eq!(set.to_string(), "*");
    }

    #[test]
    fn display_formats() {
        assert_eq!(bounded(0, 0).to_string(), "2000-01-01");
        assert_eq!(
            bounded(0, 1).to_string(),
            ">=2000-01-01, <=2000-01-02"
        );
        assert_eq!(DateRange::starting_at(day(0)).to_string(), ">=2000-01-01");
        assert_eq!(DateRange::ending_at(day(0)).to_string(), "<=2000-01-01");
        let set = DateRangeSet::new([bounded(0, 1), bounded(10, 11)]);
        assert_eq!(
            set.to_string(),
            ">=2000-01-01, <=2000-01-02 | >=2000-01-11, <=2000-01-12"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_inverted_range_fails() {
        let result: Result<DateRange, _> =
            serde_json::from_str(r#"{"start":"2024-05-01","end":"2024-01-01"}"#);
        assert!(result.is_err());
    }
}
