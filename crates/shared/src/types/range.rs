//! Inclusive Gregorian date ranges used as report and query periods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive `[from, to]` span of Gregorian dates.
///
/// Construction does not enforce `from <= to`; use [`DateRange::is_valid`]
/// where the caller supplied the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub from: NaiveDate,
    /// Last day included.
    pub to: NaiveDate,
}

impl DateRange {
    /// Creates a range from its bounds.
    #[must_use]
    pub const fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Returns true when `from` is not after `to`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.from <= self.to
    }

    /// Returns true if `date` falls inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Number of days covered, bounds included. Zero for an inverted range.
    #[must_use]
    pub fn days(&self) -> i64 {
        ((self.to - self.from).num_days() + 1).max(0)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {}",
            self.from.format("%Y-%m-%d"),
            self.to.format("%Y-%m-%d")
        )
    }
}
