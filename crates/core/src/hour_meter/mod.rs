//! Generator hour meters.
//!
//! Readings are stored as decimal hours and shown as `H:MM`.

pub mod error;
pub mod reading;
pub mod time;


pub use error::HourMeterError;
pub use reading::{HourMeterReading, opening_hour_for, record_reading, validate_reading};
pub use time::{
    HoursMinutes, decimal_to_hours_minutes, format_decimal_as_hours_minutes,
    hours_minutes_to_decimal, parse_hours_minutes,
};
