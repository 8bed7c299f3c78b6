//! Report error types.

use chrono::NaiveDate;
use genfleet_shared::AppError;
use thiserror::Error;

/// Errors from report query handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// `from` or `to` was not supplied.
    #[error("Missing required parameters: from and to dates")]
    MissingDates,

    /// A date not in `YYYY-MM-DD` form, or not a real day.
    #[error("Invalid date format '{0}'. Use YYYY-MM-DD")]
    InvalidDateFormat(String),

    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Generator filter that is not an ID.
    #[error("Invalid generator id: {0}")]
    InvalidGeneratorId(String),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(err.to_string())
    }
}
