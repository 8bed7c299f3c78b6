//! Decimal hours and `H:MM` notation.
//!
//! The meter stores decimal hours (`1258.5`); operators read and type
//! hours and minutes (`1258:30`).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::HourMeterError;

const MINUTES_PER_HOUR: u32 = 60;

/// Whole hours plus minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HoursMinutes {
    /// Whole hours.
    pub hours: u64,
    /// Minutes, always `0..=59`.
    pub minutes: u32,
}

impl HoursMinutes {
    /// Creates a value, rejecting minutes of 60 or more.
    pub const fn new(hours: u64, minutes: u32) -> Result<Self, HourMeterError> {
        if minutes >= MINUTES_PER_HOUR {
            return Err(HourMeterError::MinutesOutOfRange(minutes));
        }
        Ok(Self { hours, minutes })
    }

    /// Back to decimal hours.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        hours_minutes_to_decimal(self.hours, self.minutes)
    }
}

impl std::fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

impl std::str::FromStr for HoursMinutes {
    type Err = HourMeterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HourMeterError::InvalidFormat(s.to_string());
        let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
        if minutes.contains(':') {
            return Err(invalid());
        }
        let hours: u64 = hours.parse().map_err(|_| invalid())?;
        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
        Self::new(hours, minutes)
    }
}

/// Splits decimal hours into hours and minutes.
///
/// Minutes are rounded to the nearest whole minute; a fraction that rounds
/// up to 60 carries into the hour (`2.999` → `3:00`).
///
/// # Errors
///
/// Returns [`HourMeterError::NegativeHours`] for negative input and
/// [`HourMeterError::HoursOutOfRange`] when the hours do not fit in a `u64`.
pub fn decimal_to_hours_minutes(decimal: Decimal) -> Result<HoursMinutes, HourMeterError> {
    if decimal < Decimal::ZERO {
        return Err(HourMeterError::NegativeHours(decimal));
    }
    let whole = decimal.floor();
    let minutes = ((decimal - whole) * Decimal::from(MINUTES_PER_HOUR))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let out_of_range = || HourMeterError::HoursOutOfRange(decimal);
    let hours = whole.to_u64().ok_or_else(out_of_range)?;
    let minutes = minutes.to_u32().unwrap_or(0);

    if minutes >= MINUTES_PER_HOUR {
        Ok(HoursMinutes {
            hours: hours.checked_add(1).ok_or_else(out_of_range)?,
            minutes: 0,
        })
    } else {
        Ok(HoursMinutes { hours, minutes })
    }
}

/// `hours + minutes / 60`.
#[must_use]
pub fn hours_minutes_to_decimal(hours: u64, minutes: u32) -> Decimal {
    Decimal::from(hours) + Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)
}

/// Formats decimal hours as `H:MM`, e.g. `1258.5` → `"1258:30"`.
///
/// # Errors
///
/// Returns [`HourMeterError::NegativeHours`] for negative input.
pub fn format_decimal_as_hours_minutes(decimal: Decimal) -> Result<String, HourMeterError> {
    decimal_to_hours_minutes(decimal).map(|hm| hm.to_string())
}

/// Parses `H:MM` into decimal hours, e.g. `"1258:30"` → `1258.5`.
///
/// # Errors
///
/// Returns an error unless the input is two `:`-separated integers with
/// minutes in `0..=59`.
pub fn parse_hours_minutes(value: &str) -> Result<Decimal, HourMeterError> {
    value.parse::<HoursMinutes>().map(HoursMinutes::to_decimal)
}
