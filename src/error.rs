// SPDX-License-Identifier: MPL-2.0

//! Handling date range errors.

use std::fmt;

use thiserror::Error;

pub use calendar_ranges::InvalidRange;

/// One side of a record's date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The start date.
    Start,
    /// The end date.
    End,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Start => write!(f, "start"),
            Boundary::End => write!(f, "end"),
        }
    }
}

/// Errors that may occur while mutating a date-ranged record.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeError {
    /// The boundaries describe a range that starts after it ends.
    #[error(transparent)]
    InvalidRange(#[from] InvalidRange),

    /// A date was supplied for a boundary the record does not store.
    ///
    /// Raised by records that only carry one of the two boundaries (or
    /// neither) when a value is given for a missing side. Never ignored
    /// silently.
    #[error("the record does not store a {0} date")]
    UnsupportedBoundary(Boundary),
}
