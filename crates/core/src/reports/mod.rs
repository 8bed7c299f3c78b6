//! Fleet cost and hour-reading reports.
//!
//! This module provides:
//! - Report query parsing and validation
//! - Generator running-cost reports
//! - Daily hour-meter reading reports

pub mod error;
pub mod query;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use query::ReportQuery;
pub use service::{CostReportService, HourReadingsService, ReportData};
pub use types::{
    CostReport, CostTotals, DailyReadings, GeneratorCost, GeneratorHours, GeneratorSummary,
    HourReadingsReport, HourTotals, ReadingEntry, ReportPrecision,
};
