//! Gregorian ↔ Bikram Sambat conversion.
//!
//! Everything is measured as a day offset from a single anchor:
//! BS 2080/01/01 = 2023-04-14. Year starts come from summing the tabulated
//! years and counting whole fallback years; only the months of one year are
//! walked. Both directions use the same lengths, so they are exact inverses.

use chrono::{Datelike, NaiveDate};
use genfleet_shared::DateRange;

use super::date::BsDate;
use super::error::CalendarError;
use super::month::NepaliMonth;
use super::table::{
    FALLBACK_YEAR_DAYS, TABLE_FIRST_YEAR, TABLE_LAST_YEAR, days_in_month, days_in_year,
    is_tabulated,
};

/// BS side of the anchor. Sits on the first tabulated year, which the
/// offset arithmetic below relies on.
pub const REFERENCE_BS: BsDate = BsDate::first_of(TABLE_FIRST_YEAR, NepaliMonth::Baisakh);

/// Gregorian side of the anchor (2023-04-14) as days since 0001-01-01 CE.
const REFERENCE_CE_DAYS: i32 = 738_624;

/// The anchor pair `(BS 2080/01/01, 2023-04-14)`.
#[must_use]
pub fn reference_point() -> (BsDate, NaiveDate) {
    (REFERENCE_BS, gregorian_at_offset(0))
}

fn offset_of(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - i64::from(REFERENCE_CE_DAYS)
}

/// Saturates at the ends of chrono's representable range. Dates from
/// [`BsDate`]'s constructors never get there; only [`month_range`] of a
/// period far outside [`BsDate::MIN_YEAR`]..=[`BsDate::MAX_YEAR`] does.
fn gregorian_at_offset(offset: i64) -> NaiveDate {
    i32::try_from(i64::from(REFERENCE_CE_DAYS) + offset)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .unwrap_or(if offset < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// BS year containing `offset` and the zero-based day within that year.
///
/// Only the tabulated years are walked; fallback years before and after the
/// table all have [`FALLBACK_YEAR_DAYS`] days and are stepped over by division.
#[allow(clippy::cast_possible_truncation)]
fn year_containing(offset: i64) -> (i32, i64) {
    let fallback = i64::from(FALLBACK_YEAR_DAYS);
    if offset < 0 {
        let year = i64::from(TABLE_FIRST_YEAR) + offset.div_euclid(fallback);
        // chrono's date range keeps BS years far inside i32
        return (year as i32, offset.rem_euclid(fallback));
    }

    let mut start = 0;
    for year in TABLE_FIRST_YEAR..=TABLE_LAST_YEAR {
        let length = i64::from(days_in_year(year));
        if offset < start + length {
            return (year, offset - start);
        }
        start += length;
    }

    let past = offset - start;
    let year = i64::from(TABLE_LAST_YEAR) + 1 + past.div_euclid(fallback);
    (year as i32, past.rem_euclid(fallback))
}

/// Converts a Gregorian date to its Bikram Sambat equivalent.
///
/// Works before and after the anchor. Outside the tabulated years the
/// result follows the fallback month lengths.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gregorian_to_bs(date: NaiveDate) -> BsDate {
    let (year, mut left) = year_containing(offset_of(date));

    let mut month = NepaliMonth::Chaitra;
    for candidate in NepaliMonth::ALL {
        let length = i64::from(days_in_month(year, candidate));
        if left < length {
            month = candidate;
            break;
        }
        left -= length;
    }

    if !is_tabulated(year) {
        tracing::debug!(%date, bs_year = year, "BS year outside month-length table, using fallback lengths");
    }

    // bounded by the month length
    BsDate::from_valid(year, month, left as u32 + 1)
}

/// Like [`gregorian_to_bs`] but refuses results outside the tabulated years.
pub fn gregorian_to_bs_strict(date: NaiveDate) -> Result<BsDate, CalendarError> {
    let bs = gregorian_to_bs(date);
    if is_tabulated(bs.year()) {
        Ok(bs)
    } else {
        Err(CalendarError::UntabulatedYear(bs.year()))
    }
}

/// Days from the anchor to day 1 of BS `year`. Negative before the anchor.
fn offset_to_year_start(year: i64) -> i64 {
    let fallback = i64::from(FALLBACK_YEAR_DAYS);
    let first = i64::from(TABLE_FIRST_YEAR);
    if year <= first {
        return (year - first) * fallback;
    }

    let tabulated: i64 = (TABLE_FIRST_YEAR..=TABLE_LAST_YEAR)
        .filter(|&y| i64::from(y) < year)
        .map(|y| i64::from(days_in_year(y)))
        .sum();
    let after_table = (year - i64::from(TABLE_LAST_YEAR) - 1).max(0);
    tabulated + after_table * fallback
}

/// Days from the anchor to day 1 of `year`/`month`. Negative before the anchor.
fn offset_to_month_start(year: i32, month: NepaliMonth) -> i64 {
    let months_before: i64 = NepaliMonth::ALL[..month.index()]
        .iter()
        .map(|&m| i64::from(days_in_month(year, m)))
        .sum();
    offset_to_year_start(i64::from(year)) + months_before
}

/// Converts a Bikram Sambat date back to Gregorian. Inverse of
/// [`gregorian_to_bs`]. Constant time in the distance from the anchor.
#[must_use]
pub fn bs_to_gregorian(date: BsDate) -> NaiveDate {
    let offset = offset_to_month_start(date.year(), date.month()) + i64::from(date.day()) - 1;
    gregorian_at_offset(offset)
}

/// Gregorian `[first day, last day]` of a BS month.
///
/// Turns a month picked in a report selector into a query range.
#[must_use]
pub fn month_range(year: i32, month: NepaliMonth) -> DateRange {
    let start = offset_to_month_start(year, month);
    let length = i64::from(days_in_month(year, month));
    DateRange::new(
        gregorian_at_offset(start),
        gregorian_at_offset(start + length - 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bs(y: i32, m: u32, d: u32) -> BsDate {
        BsDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_reference_point() {
        let (bs_ref, ad_ref) = reference_point();
        assert_eq!(ad_ref, date(2023, 4, 14));
        assert_eq!(bs_ref, bs(2080, 1, 1));
        assert_eq!(gregorian_to_bs(ad_ref), bs_ref);
        assert_eq!(bs_to_gregorian(bs_ref), ad_ref);
    }

    #[rstest]
    #[case(date(2023, 5, 14), bs(2080, 1, 31))]
    #[case(date(2023, 5, 15), bs(2080, 2, 1))]
    #[case(date(2023, 7, 16), bs(2080, 3, 31))]
    #[case(date(2023, 7, 17), bs(2080, 4, 1))]
    #[case(date(2024, 4, 13), bs(2080, 12, 31))]
    #[case(date(2024, 4, 14), bs(2081, 1, 1))]
    #[case(date(2025, 7, 17), bs(2082, 4, 1))]
    #[case(date(2026, 4, 13), bs(2082, 12, 30))]
    fn test_forward_conversion(#[case] ad: NaiveDate, #[case] expected: BsDate) {
        assert_eq!(gregorian_to_bs(ad), expected);
        assert_eq!(bs_to_gregorian(expected), ad);
    }

    #[rstest]
    #[case(date(2023, 4, 13), bs(2079, 12, 30))]
    #[case(date(2023, 3, 15), bs(2079, 12, 1))]
    #[case(date(2023, 3, 14), bs(2079, 11, 30))]
    #[case(date(2022, 4, 14), bs(2079, 1, 1))]
    fn test_backward_conversion_uses_fallback(#[case] ad: NaiveDate, #[case] expected: BsDate) {
        assert_eq!(gregorian_to_bs(ad), expected);
        assert_eq!(bs_to_gregorian(expected), ad);
    }

    #[test]
    fn test_strict_conversion() {
        assert_eq!(
            gregorian_to_bs_strict(date(2023, 7, 17)),
            Ok(bs(2080, 4, 1))
        );
        assert_eq!(
            gregorian_to_bs_strict(date(2023, 4, 13)),
            Err(CalendarError::UntabulatedYear(2079))
        );
    }

    #[rstest]
    #[case(2080, NepaliMonth::Baisakh, date(2023, 4, 14), date(2023, 5, 14))]
    #[case(2080, NepaliMonth::Shrawan, date(2023, 7, 17), date(2023, 8, 17))]
    #[case(2080, NepaliMonth::Chaitra, date(2024, 3, 14), date(2024, 4, 13))]
    #[case(2081, NepaliMonth::Ashadh, date(2024, 6, 15), date(2024, 7, 16))]
    #[case(2079, NepaliMonth::Chaitra, date(2023, 3, 15), date(2023, 4, 13))]
    fn test_month_range(
        #[case] year: i32,
        #[case] month: NepaliMonth,
        #[case] from: NaiveDate,
        #[case] to: NaiveDate,
    ) {
        assert_eq!(month_range(year, month), DateRange::new(from, to));
    }

    #[rstest]
    #[case(BsDate::MIN_YEAR)]
    #[case(-1)]
    #[case(1)]
    #[case(2091)]
    #[case(5000)]
    #[case(BsDate::MAX_YEAR)]
    fn test_far_years_convert_exactly(#[case] year: i32) {
        for date in [
            bs(year, 1, 1),
            bs(year, 6, 15),
            bs(year, 12, 30),
        ] {
            let ad = bs_to_gregorian(date);
            assert!(ad > NaiveDate::MIN && ad < NaiveDate::MAX);
            assert_eq!(gregorian_to_bs(ad), date);
        }
    }

    #[test]
    fn test_year_boundaries_meet_across_the_table() {
        for year in [2079, 2090, 2091, BsDate::MAX_YEAR - 1] {
            let last = bs(year, 12, 1).last_of_month();
            let next = bs_to_gregorian(last).succ_opt().unwrap();
            assert_eq!(gregorian_to_bs(next), bs(year + 1, 1, 1));
        }
    }

    #[test]
    fn test_extreme_gregorian_dates_convert_back() {
        for ad in [NaiveDate::MIN, NaiveDate::MAX] {
            assert_eq!(bs_to_gregorian(gregorian_to_bs(ad)), ad);
        }
    }

    #[test]
    fn test_consecutive_month_ranges_are_contiguous() {
        let mut period = (2080, NepaliMonth::Baisakh);
        for _ in 0..36 {
            let range = month_range(period.0, period.1);
            let (next, rolled) = period.1.succ();
            let next_year = if rolled { period.0 + 1 } else { period.0 };
            let next_range = month_range(next_year, next);
            assert_eq!(range.to.succ_opt().unwrap(), next_range.from);
            period = (next_year, next);
        }
    }
}
