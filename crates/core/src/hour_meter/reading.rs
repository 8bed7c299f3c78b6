//! Daily hour-meter readings.

use chrono::{DateTime, NaiveDate, Utc};
use genfleet_shared::types::{GeneratorId, HourReadingId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::HourMeterError;
use crate::fleet::Generator;

/// One day's opening and closing meter values for a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourMeterReading {
    /// Unique identifier.
    pub id: HourReadingId,
    /// Generator read.
    pub generator_id: GeneratorId,
    /// Day of the reading.
    pub date: NaiveDate,
    /// Meter at start of day, decimal hours.
    pub opening_hour: Decimal,
    /// Meter at end of day, decimal hours.
    pub closing_hour: Decimal,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who entered the reading.
    pub created_by: Option<UserId>,
    /// When the reading was entered.
    pub created_at: DateTime<Utc>,
}

impl HourMeterReading {
    /// Builds a reading after checking the meter did not go backwards.
    ///
    /// # Errors
    ///
    /// Returns [`HourMeterError::ClosingBeforeOpening`] when `closing < opening`.
    pub fn new(
        generator_id: GeneratorId,
        date: NaiveDate,
        opening_hour: Decimal,
        closing_hour: Decimal,
    ) -> Result<Self, HourMeterError> {
        validate_reading(opening_hour, closing_hour)?;
        Ok(Self {
            id: HourReadingId::new(),
            generator_id,
            date,
            opening_hour,
            closing_hour,
            notes: None,
            created_by: None,
            created_at: Utc::now(),
        })
    }

    /// Hours run during the day.
    #[must_use]
    pub fn hours_run(&self) -> Decimal {
        self.closing_hour.saturating_sub(self.opening_hour)
    }
}

/// Checks a closing value against its opening value.
///
/// # Errors
///
/// Returns [`HourMeterError::NegativeHours`] for a negative opening and
/// [`HourMeterError::ClosingBeforeOpening`] when `closing < opening`.
pub fn validate_reading(opening: Decimal, closing: Decimal) -> Result<(), HourMeterError> {
    if opening < Decimal::ZERO {
        return Err(HourMeterError::NegativeHours(opening));
    }
    if closing < opening {
        return Err(HourMeterError::ClosingBeforeOpening { opening, closing });
    }
    Ok(())
}

/// Opening value for the next reading: the closing value of the generator's
/// latest reading, else its initial hour reading.
#[must_use]
pub fn opening_hour_for(generator: &Generator, readings: &[HourMeterReading]) -> Decimal {
    readings
        .iter()
        .filter(|r| r.generator_id == generator.id)
        .max_by_key(|r| (r.date, r.created_at))
        .map_or(generator.initial_hour_reading, |r| r.closing_hour)
}

/// Builds the day's reading for `generator`, taking the opening value from
/// its history.
///
/// # Errors
///
/// Returns an error if a reading already exists for that day or the closing
/// value is below the opening value.
pub fn record_reading(
    generator: &Generator,
    readings: &[HourMeterReading],
    date: NaiveDate,
    closing_hour: Decimal,
) -> Result<HourMeterReading, HourMeterError> {
    if readings
        .iter()
        .any(|r| r.generator_id == generator.id && r.date == date)
    {
        return Err(HourMeterError::DuplicateEntry {
            generator_id: generator.id,
            date,
        });
    }

    let opening = opening_hour_for(generator, readings);
    let reading = HourMeterReading::new(generator.id, date, opening, closing_hour)?;
    tracing::debug!(
        generator = %generator.name,
        %date,
        hours_run = %reading.hours_run(),
        "hour reading accepted"
    );
    Ok(reading)
}
