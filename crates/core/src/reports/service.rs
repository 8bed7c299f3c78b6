//! Report generation services.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use genfleet_shared::FuelType;
use genfleet_shared::types::GeneratorId;
use rust_decimal::{Decimal, RoundingStrategy};

use super::query::ReportQuery;
use super::types::{
    CostReport, CostTotals, DailyReadings, GeneratorCost, GeneratorHours, GeneratorSummary,
    HourReadingsReport, HourTotals, ReadingEntry, ReportPrecision,
};
use crate::calendar::describe_period;
use crate::fleet::Generator;
use crate::hour_meter::HourMeterReading;
use crate::stock::{FuelIssue, FuelPurchase};

/// Records a report is computed from. Callers load them; the services filter.
#[derive(Debug, Clone, Copy)]
pub struct ReportData<'a> {
    /// All generators.
    pub generators: &'a [Generator],
    /// Hour-meter readings.
    pub readings: &'a [HourMeterReading],
    /// Fuel issued to generators.
    pub issues: &'a [FuelIssue],
    /// Fuel purchased.
    pub purchases: &'a [FuelPurchase],
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// `numerator / denominator`, or zero when the denominator is not positive.
/// A quotient too large for `Decimal` saturates.
fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(if numerator.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

fn add(total: &mut Decimal, value: Decimal) {
    *total = total.saturating_add(value);
}

fn sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Active generators the query selects, in input order.
fn selected<'a>(query: &ReportQuery, generators: &'a [Generator]) -> Vec<&'a Generator> {
    generators
        .iter()
        .filter(|g| g.is_active)
        .filter(|g| query.generator_id.is_none_or(|id| g.id == id))
        .collect()
}

/// Service for generator cost reports.
pub struct CostReportService;

impl CostReportService {
    /// Average price per litre of each fuel type over purchases dated on or
    /// before `as_of`. A fuel with no purchased quantity costs zero.
    #[must_use]
    pub fn average_cost_per_litre(
        purchases: &[FuelPurchase],
        as_of: NaiveDate,
    ) -> BTreeMap<FuelType, Decimal> {
        let mut sums: BTreeMap<FuelType, (Decimal, Decimal)> = BTreeMap::new();
        for purchase in purchases.iter().filter(|p| p.date <= as_of) {
            let entry = sums.entry(purchase.fuel_type).or_default();
            add(&mut entry.0, purchase.quantity_litres);
            add(&mut entry.1, purchase.amount());
        }
        sums.into_iter()
            .map(|(fuel, (quantity, cost))| (fuel, ratio(cost, quantity)))
            .collect()
    }

    /// Generates the cost report.
    ///
    /// Hours come from readings inside the range, litres from issues inside
    /// the range, and cost from the fuel's average purchase price up to the
    /// end of the range. Totals add the already rounded rows.
    #[must_use]
    pub fn generate(
        query: &ReportQuery,
        data: ReportData<'_>,
        precision: ReportPrecision,
    ) -> CostReport {
        let range = query.range;
        let avg_cost = Self::average_cost_per_litre(data.purchases, range.to);

        let mut hours: HashMap<GeneratorId, Decimal> = HashMap::new();
        for reading in data.readings.iter().filter(|r| range.contains(r.date)) {
            add(hours.entry(reading.generator_id).or_default(), reading.hours_run());
        }
        let mut litres: HashMap<GeneratorId, Decimal> = HashMap::new();
        for issue in data.issues.iter().filter(|i| range.contains(i.date)) {
            add(litres.entry(issue.generator_id).or_default(), issue.quantity_litres);
        }

        let generators: Vec<GeneratorCost> = selected(query, data.generators)
            .into_iter()
            .map(|generator| {
                let total_hours = hours.get(&generator.id).copied().unwrap_or_default();
                let total_fuel = litres.get(&generator.id).copied().unwrap_or_default();
                let cost_per_litre = avg_cost
                    .get(&generator.fuel_type)
                    .copied()
                    .unwrap_or_default();
                let total_cost = total_fuel.saturating_mul(cost_per_litre);

                GeneratorCost {
                    id: generator.id,
                    name: generator.name.clone(),
                    fuel_type: generator.fuel_type,
                    total_hours: round(total_hours, precision.quantity_dp),
                    total_fuel_used: round(total_fuel, precision.quantity_dp),
                    avg_consumption: round(ratio(total_fuel, total_hours), precision.amount_dp),
                    total_fuel_cost: round(total_cost, precision.amount_dp),
                    hourly_cost: round(ratio(total_cost, total_hours), precision.amount_dp),
                }
            })
            .collect();

        let totals = Self::totals(&generators, precision);

        tracing::debug!(
            %range,
            generators = generators.len(),
            total_cost = %totals.total_fuel_cost,
            "cost report generated"
        );

        CostReport {
            period: range,
            nepali_period: describe_period(range),
            generators,
            totals,
        }
    }

    fn totals(rows: &[GeneratorCost], precision: ReportPrecision) -> CostTotals {
        let total_hours = sum(rows.iter().map(|r| r.total_hours));
        let total_fuel_used = sum(rows.iter().map(|r| r.total_fuel_used));
        let total_fuel_cost = sum(rows.iter().map(|r| r.total_fuel_cost));

        CostTotals {
            total_hours: round(total_hours, precision.quantity_dp),
            total_fuel_used: round(total_fuel_used, precision.quantity_dp),
            total_fuel_cost: round(total_fuel_cost, precision.amount_dp),
            avg_hourly_cost: round(ratio(total_fuel_cost, total_hours), precision.amount_dp),
        }
    }
}

/// Service for hour-meter reading reports.
pub struct HourReadingsService;

impl HourReadingsService {
    /// Generates the readings report: active generators by name, readings in
    /// the range grouped by day (newest first), and hour totals.
    #[must_use]
    pub fn generate(query: &ReportQuery, data: ReportData<'_>) -> HourReadingsReport {
        let range = query.range;
        let mut generators = selected(query, data.generators);
        generators.sort_by(|a, b| a.name.cmp(&b.name));

        let mut in_range: Vec<&HourMeterReading> = data
            .readings
            .iter()
            .filter(|r| range.contains(r.date))
            .filter(|r| query.generator_id.is_none_or(|id| r.generator_id == id))
            .collect();
        in_range.sort_by(|a, b| b.date.cmp(&a.date));

        let mut readings: Vec<DailyReadings> = Vec::new();
        let mut hours: HashMap<GeneratorId, Decimal> = HashMap::new();
        for reading in in_range {
            add(hours.entry(reading.generator_id).or_default(), reading.hours_run());

            let entry = ReadingEntry {
                generator_id: reading.generator_id,
                opening_hour: reading.opening_hour,
                closing_hour: reading.closing_hour,
                hours_run: reading.hours_run(),
            };
            match readings.last_mut() {
                Some(day) if day.date == reading.date => day.entries.push(entry),
                _ => readings.push(DailyReadings {
                    date: reading.date,
                    entries: vec![entry],
                }),
            }
        }

        let by_generator: Vec<GeneratorHours> = generators
            .iter()
            .map(|g| GeneratorHours {
                generator_id: g.id,
                name: g.name.clone(),
                total_hours: hours.get(&g.id).copied().unwrap_or_default(),
            })
            .collect();
        let grand_total = sum(by_generator.iter().map(|g| g.total_hours));

        HourReadingsReport {
            period: range,
            generators: generators
                .into_iter()
                .map(|g| GeneratorSummary {
                    id: g.id,
                    name: g.name.clone(),
                    fuel_type: g.fuel_type,
                })
                .collect(),
            readings,
            totals: HourTotals {
                by_generator,
                grand_total,
            },
        }
    }
}
