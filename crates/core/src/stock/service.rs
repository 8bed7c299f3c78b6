//! Stock-check workflow.
//!
//! Pure business logic over a [`StockCheckRepository`]; callers hand in the
//! purchase and issue records and the service does the filtering, summing,
//! reconciliation and single-check-per-month bookkeeping.

use genfleet_shared::{DateRange, FuelType};
use rust_decimal::Decimal;

use super::error::StockError;
use super::reconcile::{StockMovement, StockReconciliation, opening_stock};
use super::repository::StockCheckRepository;
use super::types::{FuelIssue, FuelPurchase, NewStockCheck, StockCheck};
use crate::calendar::BsPeriod;

/// Stock reconciliation service.
pub struct StockService;

impl StockService {
    /// Litres of `fuel` purchased inside `range` (inclusive).
    #[must_use]
    pub fn sum_purchases(purchases: &[FuelPurchase], fuel: FuelType, range: DateRange) -> Decimal {
        purchases
            .iter()
            .filter(|p| p.fuel_type == fuel && range.contains(p.date))
            .fold(Decimal::ZERO, |total, p| total.saturating_add(p.quantity_litres))
    }

    /// Litres of `fuel` issued inside `range` (inclusive).
    #[must_use]
    pub fn sum_issues(issues: &[FuelIssue], fuel: FuelType, range: DateRange) -> Decimal {
        issues
            .iter()
            .filter(|i| i.fuel_type == fuel && range.contains(i.date))
            .fold(Decimal::ZERO, |total, i| total.saturating_add(i.quantity_litres))
    }

    /// Builds the month's movement: opening from the previous month's check,
    /// purchases and issues summed over the month's Gregorian range.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository lookup fails.
    pub fn prepare_movement<R: StockCheckRepository>(
        repo: &R,
        fuel: FuelType,
        period: BsPeriod,
        purchases: &[FuelPurchase],
        issues: &[FuelIssue],
    ) -> Result<StockMovement, StockError> {
        let previous = repo.find(fuel, period.pred())?;
        let range = period.range();

        Ok(StockMovement::new(
            opening_stock(previous.as_ref()),
            Self::sum_purchases(purchases, fuel, range),
            Self::sum_issues(issues, fuel, range),
        ))
    }

    /// Rejects negative physical counts.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::NegativePhysicalCount`] for counts below zero.
    pub fn validate_physical_count(physical: Decimal) -> Result<Decimal, StockError> {
        if physical < Decimal::ZERO {
            return Err(StockError::NegativePhysicalCount(physical));
        }
        Ok(physical)
    }

    /// Reconciles a month without persisting anything, for previews.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository lookup fails.
    pub fn preview<R: StockCheckRepository>(
        repo: &R,
        input: &NewStockCheck,
        purchases: &[FuelPurchase],
        issues: &[FuelIssue],
    ) -> Result<StockReconciliation, StockError> {
        let movement =
            Self::prepare_movement(repo, input.fuel_type, input.period, purchases, issues)?;
        Ok(movement.reconcile(input.physical_closing))
    }

    /// Validates, reconciles and stores a month's stock check.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The physical count is negative
    /// - A check already exists for this fuel type and month
    /// - The repository fails
    pub fn record_check<R: StockCheckRepository>(
        repo: &R,
        input: &NewStockCheck,
        purchases: &[FuelPurchase],
        issues: &[FuelIssue],
    ) -> Result<StockCheck, StockError> {
        if let Err(err) = Self::validate_physical_count(input.physical_closing) {
            tracing::warn!(fuel = %input.fuel_type, period = %input.period, %err, "stock check rejected");
            return Err(err);
        }

        if repo.find(input.fuel_type, input.period)?.is_some() {
            tracing::warn!(fuel = %input.fuel_type, period = %input.period, "stock check already recorded");
            return Err(StockError::AlreadyRecorded {
                fuel: input.fuel_type,
                period: input.period,
            });
        }

        let reconciliation = Self::preview(repo, input, purchases, issues)?;
        let check = repo.insert(StockCheck::from_reconciliation(input, &reconciliation))?;

        tracing::info!(
            fuel = %check.fuel_type,
            period = %check.period,
            theoretical = %check.theoretical_closing,
            physical = %check.physical_closing,
            variance = %check.variance,
            "stock check recorded"
        );
        Ok(check)
    }
}
