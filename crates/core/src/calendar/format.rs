//! Human-readable renderings of dates in both calendars.

use chrono::{Local, NaiveDate};

use super::convert::gregorian_to_bs;
use super::date::BsDate;

/// Long BS form, e.g. `1 Baisakh 2080`.
#[must_use]
pub fn format_nepali_date(date: NaiveDate) -> String {
    let bs = gregorian_to_bs(date);
    format!("{} {} {}", bs.day(), bs.month().name(), bs.year())
}

/// Short BS form, e.g. `2080/01/01`.
#[must_use]
pub fn format_nepali_date_short(date: NaiveDate) -> String {
    gregorian_to_bs(date).to_string()
}

/// Both calendars, e.g. `Apr 14, 2023 (1 Baisakh 2080 BS)`.
#[must_use]
pub fn format_both_dates(date: NaiveDate) -> String {
    format!(
        "{} ({} BS)",
        date.format("%b %-d, %Y"),
        format_nepali_date(date)
    )
}

/// Today's BS date in the machine's local time zone.
#[must_use]
pub fn today_bs() -> BsDate {
    gregorian_to_bs(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_long_and_short_forms() {
        assert_eq!(format_nepali_date(date(2023, 4, 14)), "1 Baisakh 2080");
        assert_eq!(format_nepali_date(date(2023, 7, 17)), "1 Shrawan 2080");
        assert_eq!(format_nepali_date_short(date(2023, 7, 17)), "2080/04/01");
        assert_eq!(format_nepali_date_short(date(2024, 4, 13)), "2080/12/31");
    }

    #[test]
    fn test_both_dates() {
        assert_eq!(
            format_both_dates(date(2023, 4, 14)),
            "Apr 14, 2023 (1 Baisakh 2080 BS)"
        );
        assert_eq!(
            format_both_dates(date(2023, 5, 5)),
            "May 5, 2023 (22 Baisakh 2080 BS)"
        );
    }

    #[test]
    fn test_today_is_after_reference() {
        assert!(today_bs().year() >= 2080);
    }
}
