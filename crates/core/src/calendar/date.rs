//! Bikram Sambat civil dates.

use serde::{Deserialize, Serialize};

use super::error::CalendarError;
use super::month::NepaliMonth;
use super::table::days_in_month;

/// A Bikram Sambat civil date.
///
/// Always valid: `day` lies within `1..=days_in_month(year, month)`. Values
/// come out of conversion or a validating constructor and are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawBsDate")]
pub struct BsDate {
    year: i32,
    month: NepaliMonth,
    day: u32,
}

#[derive(Deserialize)]
struct RawBsDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawBsDate> for BsDate {
    type Error = CalendarError;

    fn try_from(raw: RawBsDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl BsDate {
    /// Earliest year the constructors accept.
    pub const MIN_YEAR: i32 = -200_000;

    /// Latest year the constructors accept. Every accepted date has an exact
    /// Gregorian counterpart inside chrono's range.
    pub const MAX_YEAR: i32 = 200_000;

    /// Builds a date from raw numbers, checking month and day.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        Self::from_parts(year, NepaliMonth::from_number(month)?, day)
    }

    /// Builds a date from a typed month, checking the year and day.
    pub fn from_parts(year: i32, month: NepaliMonth, day: u32) -> Result<Self, CalendarError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange(year));
        }
        let max = days_in_month(year, month);
        if day == 0 || day > max {
            return Err(CalendarError::InvalidDay {
                year,
                month: month.number(),
                day,
                max,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Day 1 of the given month.
    #[must_use]
    pub const fn first_of(year: i32, month: NepaliMonth) -> Self {
        Self {
            year,
            month,
            day: 1,
        }
    }

    /// Caller guarantees the day is in range.
    pub(super) const fn from_valid(year: i32, month: NepaliMonth, day: u32) -> Self {
        Self { year, month, day }
    }

    /// BS year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// BS month.
    #[must_use]
    pub const fn month(&self) -> NepaliMonth {
        self.month
    }

    /// Day of month, 1-based.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Last day of this date's month.
    #[must_use]
    pub fn last_of_month(&self) -> Self {
        Self::from_valid(self.year, self.month, days_in_month(self.year, self.month))
    }
}

impl std::fmt::Display for BsDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{:02}/{:02}",
            self.year,
            self.month.number(),
            self.day
        )
    }
}

impl std::str::FromStr for BsDate {
    type Err = CalendarError;

    /// Parses `YYYY/MM/DD` or `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || CalendarError::Parse(s.to_string());
        let separator = if s.contains('/') { '/' } else { '-' };
        let mut parts = s.trim().split(separator);

        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(parse_error());
        };

        let year = year.parse::<i32>().map_err(|_| parse_error())?;
        let month = month.parse::<u32>().map_err(|_| parse_error())?;
        let day = day.parse::<u32>().map_err(|_| parse_error())?;

        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_day_against_table() {
        assert!(BsDate::new(2080, 2, 32).is_ok());
        assert_eq!(
            BsDate::new(2081, 2, 32),
            Err(CalendarError::InvalidDay {
                year: 2081,
                month: 2,
                day: 32,
                max: 31
            })
        );
        assert!(BsDate::new(2080, 1, 0).is_err());
        assert_eq!(BsDate::new(2080, 13, 1), Err(CalendarError::InvalidMonth(13)));
    }

    #[test]
    fn test_display_and_parse() {
        let date = BsDate::new(2080, 4, 1).unwrap();
        assert_eq!(date.to_string(), "2080/04/01");
        assert_eq!("2080/04/01".parse::<BsDate>().unwrap(), date);
        assert_eq!("2080-4-1".parse::<BsDate>().unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("2080/04".parse::<BsDate>(), Err(CalendarError::Parse(_))));
        assert!(matches!(
            "2080/04/01/02".parse::<BsDate>(),
            Err(CalendarError::Parse(_))
        ));
        assert!(matches!("abc/04/01".parse::<BsDate>(), Err(CalendarError::Parse(_))));
        assert!(matches!(
            "2080/04/40".parse::<BsDate>(),
            Err(CalendarError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_extreme_years_rejected() {
        assert_eq!(
            "-2147483648/01/01".parse::<BsDate>(),
            Err(CalendarError::YearOutOfRange(i32::MIN))
        );
        assert_eq!(
            BsDate::new(i32::MAX, 1, 1),
            Err(CalendarError::YearOutOfRange(i32::MAX))
        );
        assert_eq!(
            BsDate::new(BsDate::MAX_YEAR + 1, 1, 1),
            Err(CalendarError::YearOutOfRange(BsDate::MAX_YEAR + 1))
        );
        assert!(BsDate::new(BsDate::MIN_YEAR, 1, 1).is_ok());
        assert!(BsDate::new(BsDate::MAX_YEAR, 12, 30).is_ok());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = BsDate::new(2080, 12, 31).unwrap();
        let b = BsDate::new(2081, 1, 1).unwrap();
        let c = BsDate::new(2081, 1, 2).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_last_of_month() {
        let date = BsDate::new(2080, 2, 10).unwrap();
        assert_eq!(date.last_of_month().day(), 32);
    }

    #[test]
    fn test_serde_validates() {
        let date: BsDate = serde_json::from_str(r#"{"year":2080,"month":1,"day":1}"#).unwrap();
        assert_eq!(date, BsDate::first_of(2080, NepaliMonth::Baisakh));
        assert_eq!(
            serde_json::to_string(&date).unwrap(),
            r#"{"year":2080,"month":1,"day":1}"#
        );
        assert!(serde_json::from_str::<BsDate>(r#"{"year":2080,"month":1,"day":40}"#).is_err());
    }
}
