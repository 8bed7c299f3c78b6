//! Month lengths of the Bikram Sambat calendar.
//!
//! BS month lengths follow astronomical observation and cannot be computed,
//! so they are tabulated. Years outside the table use a fixed fallback row:
//! conversions stay total but lose accuracy there.

use super::month::NepaliMonth;

/// First BS year with authoritative month lengths.
pub const TABLE_FIRST_YEAR: i32 = 2080;

/// Last BS year with authoritative month lengths.
pub const TABLE_LAST_YEAR: i32 = 2090;

const MONTH_DAYS: [[u32; 12]; 11] = [
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2080
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2081
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2082
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2083
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2084
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2085
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2086
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2087
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2088
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2089
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2090
];

/// Row used for any year missing from the table.
pub const FALLBACK_MONTH_DAYS: [u32; 12] = [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30];

/// Length of a year that uses [`FALLBACK_MONTH_DAYS`].
pub const FALLBACK_YEAR_DAYS: u32 = {
    let mut total = 0;
    let mut i = 0;
    while i < FALLBACK_MONTH_DAYS.len() {
        total += FALLBACK_MONTH_DAYS[i];
        i += 1;
    }
    total
};

/// Returns true if `year` has authoritative month lengths.
#[must_use]
pub const fn is_tabulated(year: i32) -> bool {
    year >= TABLE_FIRST_YEAR && year <= TABLE_LAST_YEAR
}

/// Month lengths for `year`, if tabulated.
#[must_use]
pub fn month_lengths(year: i32) -> Option<&'static [u32; 12]> {
    usize::try_from(i64::from(year) - i64::from(TABLE_FIRST_YEAR))
        .ok()
        .and_then(|index| MONTH_DAYS.get(index))
}

/// Month lengths for `year`, falling back to [`FALLBACK_MONTH_DAYS`].
#[must_use]
pub fn month_lengths_or_fallback(year: i32) -> &'static [u32; 12] {
    month_lengths(year).unwrap_or(&FALLBACK_MONTH_DAYS)
}

/// Number of days in a BS month. Never fails; untabulated years use the
/// fallback row.
#[must_use]
pub fn days_in_month(year: i32, month: NepaliMonth) -> u32 {
    month_lengths_or_fallback(year)[month.index()]
}

/// Number of days in a BS year.
#[must_use]
pub fn days_in_year(year: i32) -> u32 {
    month_lengths_or_fallback(year).iter().sum()
}
