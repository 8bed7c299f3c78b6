//! Nepal fiscal years.
//!
//! A fiscal year runs from Shrawan 1 of one BS year through the last day of
//! Ashadh of the next (mid-July to mid-July).

use chrono::NaiveDate;
use genfleet_shared::DateRange;
use serde::{Deserialize, Serialize};

use super::convert::{gregorian_to_bs, month_range};
use super::date::BsDate;
use super::month::NepaliMonth;
use super::period::BsPeriod;

/// A fiscal year identified by the BS year its Shrawan falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FiscalYear {
    /// BS year of the opening Shrawan.
    pub start_year: i32,
}

impl FiscalYear {
    /// Creates the fiscal year starting in Shrawan of `start_year`.
    #[must_use]
    pub const fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// The fiscal year a BS month belongs to.
    #[must_use]
    pub const fn of_period(period: BsPeriod) -> Self {
        if period.month.in_fiscal_first_half() {
            Self::new(period.year)
        } else {
            Self::new(period.year - 1)
        }
    }

    /// The fiscal year a BS date belongs to.
    #[must_use]
    pub const fn of_bs(date: BsDate) -> Self {
        Self::of_period(BsPeriod::of_bs(date))
    }

    /// The fiscal year a Gregorian date belongs to.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self::of_bs(gregorian_to_bs(date))
    }

    /// Display label, e.g. `FY 2080/2081`.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// The twelve months in fiscal order, Shrawan through Ashadh.
    #[must_use]
    pub fn months(&self) -> Vec<BsPeriod> {
        let first = BsPeriod::new(self.start_year, NepaliMonth::FISCAL_START);
        std::iter::successors(Some(first), |p| Some(p.succ()))
            .take(12)
            .collect()
    }

    /// Exact Gregorian span, Shrawan 1 through the last day of Ashadh.
    #[must_use]
    pub fn range(&self) -> DateRange {
        let first = month_range(self.start_year, NepaliMonth::Shrawan);
        let last = month_range(self.start_year + 1, NepaliMonth::Ashadh);
        DateRange::new(first.from, last.to)
    }

    /// The fiscal year that follows.
    #[must_use]
    pub const fn succ(&self) -> Self {
        Self::new(self.start_year + 1)
    }
}

impl std::fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FY {}/{}", self.start_year, self.start_year + 1)
    }
}

/// Fiscal-year label for a Gregorian date, e.g. `FY 2080/2081`.
#[must_use]
pub fn fiscal_year(date: NaiveDate) -> String {
    FiscalYear::containing(date).label()
}

/// The twelve `(year, month)` periods of the fiscal year opening in
/// Shrawan of `start_year`.
#[must_use]
pub fn fiscal_year_months(start_year: i32) -> Vec<BsPeriod> {
    FiscalYear::new(start_year).months()
}

/// Names a Gregorian range when it lines up exactly with a BS month
/// (`Shrawan 2080`) or a fiscal year (`FY 2080/2081`).
#[must_use]
pub fn describe_period(range: DateRange) -> Option<String> {
    let period = BsPeriod::of_date(range.from);
    if period.range() == range {
        return Some(period.to_string());
    }

    let fy = FiscalYear::containing(range.from);
    (fy.range() == range).then(|| fy.label())
}
