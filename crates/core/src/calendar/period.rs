//! BS month periods, the unit of stock checks and monthly reports.

use chrono::NaiveDate;
use genfleet_shared::DateRange;
use serde::{Deserialize, Serialize};

use super::convert::{gregorian_to_bs, month_range};
use super::date::BsDate;
use super::month::NepaliMonth;
use super::table::days_in_month;

/// One BS month of one BS year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BsPeriod {
    /// BS year.
    pub year: i32,
    /// BS month.
    pub month: NepaliMonth,
}

impl BsPeriod {
    /// Creates a period.
    #[must_use]
    pub const fn new(year: i32, month: NepaliMonth) -> Self {
        Self { year, month }
    }

    /// The period a BS date falls in.
    #[must_use]
    pub const fn of_bs(date: BsDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// The period a Gregorian date falls in.
    #[must_use]
    pub fn of_date(date: NaiveDate) -> Self {
        Self::of_bs(gregorian_to_bs(date))
    }

    /// Gregorian span of this month.
    #[must_use]
    pub fn range(&self) -> DateRange {
        month_range(self.year, self.month)
    }

    /// Number of days in this month.
    #[must_use]
    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// The following month.
    #[must_use]
    pub const fn succ(&self) -> Self {
        let (month, rolled) = self.month.succ();
        Self::new(if rolled { self.year + 1 } else { self.year }, month)
    }

    /// The preceding month.
    #[must_use]
    pub const fn pred(&self) -> Self {
        let (month, rolled) = self.month.pred();
        Self::new(if rolled { self.year - 1 } else { self.year }, month)
    }
}

impl std::fmt::Display for BsPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succ_pred_cross_year() {
        let chaitra = BsPeriod::new(2080, NepaliMonth::Chaitra);
        assert_eq!(chaitra.succ(), BsPeriod::new(2081, NepaliMonth::Baisakh));
        assert_eq!(chaitra.succ().pred(), chaitra);
        assert_eq!(
            BsPeriod::new(2081, NepaliMonth::Shrawan).pred(),
            BsPeriod::new(2081, NepaliMonth::Ashadh)
        );
    }

    #[test]
    fn test_of_date_and_range() {
        let date = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap();
        let period = BsPeriod::of_date(date);
        assert_eq!(period, BsPeriod::new(2080, NepaliMonth::Shrawan));
        assert!(period.range().contains(date));
        assert_eq!(period.days(), 32);
        assert_eq!(period.range().days(), 32);
        assert_eq!(period.to_string(), "Shrawan 2080");
    }
}
