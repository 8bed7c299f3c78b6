//! Report query parameters.

use chrono::NaiveDate;
use genfleet_shared::DateRange;
use genfleet_shared::types::GeneratorId;
use serde::{Deserialize, Serialize};

use super::error::ReportError;

/// A validated report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Inclusive date range.
    pub range: DateRange,
    /// Restrict to one generator.
    pub generator_id: Option<GeneratorId>,
}

impl ReportQuery {
    /// Creates a query over a range, rejecting `from > to`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidDateRange`] for an inverted range.
    pub fn new(range: DateRange, generator_id: Option<GeneratorId>) -> Result<Self, ReportError> {
        if !range.is_valid() {
            return Err(ReportError::InvalidDateRange {
                start: range.from,
                end: range.to,
            });
        }
        Ok(Self {
            range,
            generator_id,
        })
    }

    /// Parses raw `from`, `to` and optional `generator_id` parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a date is missing, not strictly `YYYY-MM-DD`,
    /// the range is inverted, or the generator id is malformed.
    pub fn parse(
        from: Option<&str>,
        to: Option<&str>,
        generator_id: Option<&str>,
    ) -> Result<Self, ReportError> {
        let (Some(from), Some(to)) = (non_empty(from), non_empty(to)) else {
            return Err(ReportError::MissingDates);
        };
        let range = DateRange::new(parse_iso_date(from)?, parse_iso_date(to)?);

        let generator_id = non_empty(generator_id)
            .map(|raw| {
                raw.parse::<GeneratorId>()
                    .map_err(|_| ReportError::InvalidGeneratorId(raw.to_string()))
            })
            .transpose()?;

        Self::new(range, generator_id)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Exactly four, two and two digits separated by `-`.
fn parse_iso_date(value: &str) -> Result<NaiveDate, ReportError> {
    let invalid = || ReportError::InvalidDateFormat(value.to_string());
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}
