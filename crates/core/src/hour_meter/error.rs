//! Hour-meter error types.

use chrono::NaiveDate;
use genfleet_shared::AppError;
use genfleet_shared::types::GeneratorId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from hour-meter input handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HourMeterError {
    /// Hour values are never negative.
    #[error("Hour value cannot be negative: {0}")]
    NegativeHours(Decimal),

    /// More whole hours than `H:MM` can carry.
    #[error("Hour value too large: {0}")]
    HoursOutOfRange(Decimal),

    /// Text that is not `H:MM`.
    #[error("Invalid hours format '{0}', expected H:MM")]
    InvalidFormat(String),

    /// Minutes outside `0..=59`.
    #[error("Minutes must be between 0 and 59, got {0}")]
    MinutesOutOfRange(u32),

    /// The meter went backwards.
    #[error("Closing hour {closing} must be greater than or equal to opening hour {opening}")]
    ClosingBeforeOpening {
        /// Opening reading.
        opening: Decimal,
        /// Closing reading.
        closing: Decimal,
    },

    /// One reading per generator per day.
    #[error("Reading already recorded for generator {generator_id} on {date}")]
    DuplicateEntry {
        /// Generator.
        generator_id: GeneratorId,
        /// Reading date.
        date: NaiveDate,
    },
}

impl From<HourMeterError> for AppError {
    fn from(err: HourMeterError) -> Self {
        match err {
            HourMeterError::DuplicateEntry { .. } => Self::Conflict(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
