//! Report data types.
//!
//! Field names serialise in camelCase, the shape external consumers of the
//! read-only API receive.

use chrono::NaiveDate;
use genfleet_shared::types::GeneratorId;
use genfleet_shared::{DateRange, FuelType, ReportConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal places used when rounding report figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPrecision {
    /// Places for hours and litres.
    pub quantity_dp: u32,
    /// Places for money and ratios.
    pub amount_dp: u32,
}

impl Default for ReportPrecision {
    fn default() -> Self {
        Self {
            quantity_dp: 1,
            amount_dp: 2,
        }
    }
}

impl From<&ReportConfig> for ReportPrecision {
    fn from(config: &ReportConfig) -> Self {
        Self {
            quantity_dp: config.hours_decimals,
            amount_dp: config.amount_decimals,
        }
    }
}

/// Generator running cost over a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    /// Inclusive range reported.
    pub period: DateRange,
    /// `Shrawan 2080` or `FY 2080/2081` when the range is exactly one.
    pub nepali_period: Option<String>,
    /// One row per active generator.
    pub generators: Vec<GeneratorCost>,
    /// Column totals.
    pub totals: CostTotals,
}

/// One generator's row in a [`CostReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorCost {
    /// Generator ID.
    pub id: GeneratorId,
    /// Generator name.
    pub name: String,
    /// Fuel burned.
    pub fuel_type: FuelType,
    /// Hours run.
    pub total_hours: Decimal,
    /// Litres issued.
    pub total_fuel_used: Decimal,
    /// Litres per hour, 0 when the unit did not run.
    pub avg_consumption: Decimal,
    /// Litres issued × average cost per litre.
    pub total_fuel_cost: Decimal,
    /// Cost per hour run, 0 when the unit did not run.
    pub hourly_cost: Decimal,
}

/// Totals of a [`CostReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostTotals {
    /// Hours run.
    pub total_hours: Decimal,
    /// Litres issued.
    pub total_fuel_used: Decimal,
    /// Fuel cost.
    pub total_fuel_cost: Decimal,
    /// Fuel cost per hour across the fleet.
    pub avg_hourly_cost: Decimal,
}

/// Daily hour-meter readings over a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourReadingsReport {
    /// Inclusive range reported.
    pub period: DateRange,
    /// Active generators, by name.
    pub generators: Vec<GeneratorSummary>,
    /// Readings grouped by day, newest day first.
    pub readings: Vec<DailyReadings>,
    /// Hour totals.
    pub totals: HourTotals,
}

/// Generator listing inside a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorSummary {
    /// Generator ID.
    pub id: GeneratorId,
    /// Generator name.
    pub name: String,
    /// Fuel burned.
    pub fuel_type: FuelType,
}

/// All readings taken on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReadings {
    /// Day.
    pub date: NaiveDate,
    /// Readings for that day.
    pub entries: Vec<ReadingEntry>,
}

/// A reading inside [`DailyReadings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingEntry {
    /// Generator read.
    pub generator_id: GeneratorId,
    /// Opening meter value.
    pub opening_hour: Decimal,
    /// Closing meter value.
    pub closing_hour: Decimal,
    /// Hours run.
    pub hours_run: Decimal,
}

/// Hour totals of a [`HourReadingsReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourTotals {
    /// Per generator, same order as the generator list.
    pub by_generator: Vec<GeneratorHours>,
    /// Sum over all listed generators.
    pub grand_total: Decimal,
}

/// One generator's hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorHours {
    /// Generator ID.
    pub generator_id: GeneratorId,
    /// Generator name.
    pub name: String,
    /// Hours run.
    pub total_hours: Decimal,
}
