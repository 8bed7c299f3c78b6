//! Calendar error types.

use genfleet_shared::AppError;
use thiserror::Error;

/// Errors raised when building Bikram Sambat values from raw input.
///
/// The conversions themselves are total and never return these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Month number outside 1..=12.
    #[error("Invalid BS month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Day outside the length of its month.
    #[error("Invalid BS day {day} for {year}/{month:02} (month has {max} days)")]
    InvalidDay {
        /// BS year.
        year: i32,
        /// BS month number.
        month: u32,
        /// Offending day.
        day: u32,
        /// Days in that month.
        max: u32,
    },

    /// Year outside the range the constructors accept.
    #[error("BS year {0} is out of range")]
    YearOutOfRange(i32),

    /// Text that is not a `YYYY/MM/DD` date.
    #[error("Invalid BS date: {0}")]
    Parse(String),

    /// Year outside the month-length table while strict lookups are requested.
    #[error("BS year {0} is outside the month-length table")]
    UntabulatedYear(i32),
}

impl From<CalendarError> for AppError {
    fn from(err: CalendarError) -> Self {
        Self::Validation(err.to_string())
    }
}
