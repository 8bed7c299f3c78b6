//! Bikram Sambat calendar and Nepal fiscal-year arithmetic.
//!
//! Report period pickers work in BS months and fiscal years, while stored
//! records carry Gregorian dates. This module converts between the two and
//! turns a BS selection into a Gregorian `[from, to]` query range.
//!
//! All functions are pure and read only constant tables.

pub mod convert;
pub mod date;
pub mod error;
pub mod fiscal;
pub mod format;
pub mod month;
pub mod period;
pub mod table;


pub use convert::{
    REFERENCE_BS, bs_to_gregorian, gregorian_to_bs, gregorian_to_bs_strict, month_range,
    reference_point,
};
pub use date::BsDate;
pub use error::CalendarError;
pub use fiscal::{FiscalYear, describe_period, fiscal_year, fiscal_year_months};
pub use format::{format_both_dates, format_nepali_date, format_nepali_date_short, today_bs};
pub use month::NepaliMonth;
pub use period::BsPeriod;
pub use table::{
    FALLBACK_MONTH_DAYS, TABLE_FIRST_YEAR, TABLE_LAST_YEAR, days_in_month, days_in_year,
    is_tabulated,
};
