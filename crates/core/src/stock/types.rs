//! Fuel ledger records and stock-check shapes.

use chrono::{DateTime, NaiveDate, Utc};
use genfleet_shared::FuelType;
use genfleet_shared::types::{FuelIssueId, FuelPurchaseId, GeneratorId, StockCheckId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::StockError;
use super::reconcile::{StockMovement, StockReconciliation, VarianceKind};
use crate::calendar::{BsPeriod, FiscalYear};

/// Fuel bought into the main store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelPurchase {
    /// Unique identifier.
    pub id: FuelPurchaseId,
    /// Purchase date.
    pub date: NaiveDate,
    /// Fuel bought.
    pub fuel_type: FuelType,
    /// Litres received.
    pub quantity_litres: Decimal,
    /// Price per litre.
    pub rate_per_litre: Decimal,
    /// Invoice total, when stored separately from quantity × rate.
    pub total_amount: Option<Decimal>,
    /// Supplier.
    pub vendor: Option<String>,
    /// Supplier invoice reference.
    pub invoice_number: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl FuelPurchase {
    /// Creates a purchase with no invoice details.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        fuel_type: FuelType,
        quantity_litres: Decimal,
        rate_per_litre: Decimal,
    ) -> Self {
        Self {
            id: FuelPurchaseId::new(),
            date,
            fuel_type,
            quantity_litres,
            rate_per_litre,
            total_amount: None,
            vendor: None,
            invoice_number: None,
            notes: None,
        }
    }

    /// Amount paid: the stored total, else quantity × rate (saturating).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.total_amount
            .unwrap_or_else(|| self.quantity_litres.saturating_mul(self.rate_per_litre))
    }
}

/// Fuel issued from the main store into a generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelIssue {
    /// Unique identifier.
    pub id: FuelIssueId,
    /// Issue date.
    pub date: NaiveDate,
    /// Receiving generator.
    pub generator_id: GeneratorId,
    /// Fuel issued.
    pub fuel_type: FuelType,
    /// Litres issued.
    pub quantity_litres: Decimal,
    /// Store balance right after this issue, as recorded at entry time.
    pub stock_after_issue: Option<Decimal>,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl FuelIssue {
    /// Creates an issue.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        generator_id: GeneratorId,
        fuel_type: FuelType,
        quantity_litres: Decimal,
    ) -> Self {
        Self {
            id: FuelIssueId::new(),
            date,
            generator_id,
            fuel_type,
            quantity_litres,
            stock_after_issue: None,
            notes: None,
        }
    }
}

/// A persisted monthly stock check. One per fuel type and BS month; never
/// edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockCheck {
    /// Unique identifier.
    pub id: StockCheckId,
    /// BS month checked.
    pub period: BsPeriod,
    /// Fiscal year the month belongs to.
    pub fiscal_year: FiscalYear,
    /// Day the count was taken.
    pub check_date: NaiveDate,
    /// Fuel counted.
    pub fuel_type: FuelType,
    /// Previous month's physical closing, or zero.
    pub opening_stock: Decimal,
    /// Litres purchased during the month.
    pub total_purchases: Decimal,
    /// Litres issued during the month.
    pub total_issues: Decimal,
    /// `opening + purchases - issues`.
    pub theoretical_closing: Decimal,
    /// Litres counted.
    pub physical_closing: Decimal,
    /// `physical - theoretical`.
    pub variance: Decimal,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who performed the count.
    pub created_by: Option<UserId>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl StockCheck {
    /// Builds the record for a reconciliation.
    #[must_use]
    pub fn from_reconciliation(input: &NewStockCheck, reconciliation: &StockReconciliation) -> Self {
        Self {
            id: StockCheckId::new(),
            period: input.period,
            fiscal_year: FiscalYear::of_period(input.period),
            check_date: input.check_date,
            fuel_type: input.fuel_type,
            opening_stock: reconciliation.movement.opening,
            total_purchases: reconciliation.movement.purchases,
            total_issues: reconciliation.movement.issues,
            theoretical_closing: reconciliation.theoretical_closing,
            physical_closing: reconciliation.physical_closing,
            variance: reconciliation.variance,
            notes: input.notes.clone(),
            created_by: input.created_by,
            created_at: Utc::now(),
        }
    }

    /// The movement this check recorded.
    #[must_use]
    pub fn movement(&self) -> StockMovement {
        StockMovement::new(self.opening_stock, self.total_purchases, self.total_issues)
    }

    /// Direction of the recorded variance.
    #[must_use]
    pub fn variance_kind(&self) -> VarianceKind {
        self.movement().reconcile(self.physical_closing).kind()
    }
}

/// Input for recording a stock check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStockCheck {
    /// BS month being closed.
    pub period: BsPeriod,
    /// Day the count was taken.
    pub check_date: NaiveDate,
    /// Fuel counted.
    pub fuel_type: FuelType,
    /// Litres counted.
    pub physical_closing: Decimal,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who performed the count.
    pub created_by: Option<UserId>,
}

/// Litres on hand in the main store, per fuel type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelStockLevels {
    /// Diesel on hand.
    pub diesel: Decimal,
    /// Petrol on hand.
    pub petrol: Decimal,
}

impl FuelStockLevels {
    /// Replays purchases and issues on top of `initial`.
    #[must_use]
    pub fn from_records(initial: Self, purchases: &[FuelPurchase], issues: &[FuelIssue]) -> Self {
        let mut levels = initial;
        for purchase in purchases {
            let level = levels.get_mut(purchase.fuel_type);
            *level = level.saturating_add(purchase.quantity_litres);
        }
        for issue in issues {
            let level = levels.get_mut(issue.fuel_type);
            *level = level.saturating_sub(issue.quantity_litres);
        }
        levels
    }

    /// Litres on hand for one fuel type.
    #[must_use]
    pub const fn get(&self, fuel: FuelType) -> Decimal {
        match fuel {
            FuelType::Diesel => self.diesel,
            FuelType::Petrol => self.petrol,
        }
    }

    fn get_mut(&mut self, fuel: FuelType) -> &mut Decimal {
        match fuel {
            FuelType::Diesel => &mut self.diesel,
            FuelType::Petrol => &mut self.petrol,
        }
    }

    /// Stock that would remain after issuing `quantity` litres.
    ///
    /// Rejects non-positive quantities and issues larger than the stock on hand.
    pub fn check_issue(&self, fuel: FuelType, quantity: Decimal) -> Result<Decimal, StockError> {
        if quantity <= Decimal::ZERO {
            return Err(StockError::NonPositiveQuantity(quantity));
        }
        let available = self.get(fuel);
        if quantity > available {
            return Err(StockError::InsufficientStock {
                fuel,
                available,
                requested: quantity,
            });
        }
        Ok(available - quantity)
    }

    /// Adds a purchase to the store.
    pub fn apply_purchase(&mut self, purchase: &FuelPurchase) -> Result<(), StockError> {
        if purchase.quantity_litres <= Decimal::ZERO {
            return Err(StockError::NonPositiveQuantity(purchase.quantity_litres));
        }
        let level = self.get_mut(purchase.fuel_type);
        *level = level.saturating_add(purchase.quantity_litres);
        Ok(())
    }

    /// Takes an issue out of the store, returning the balance left.
    pub fn apply_issue(&mut self, issue: &FuelIssue) -> Result<Decimal, StockError> {
        let remaining = self.check_issue(issue.fuel_type, issue.quantity_litres)?;
        *self.get_mut(issue.fuel_type) = remaining;
        Ok(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 8, d).unwrap()
    }

    #[test]
    fn test_purchase_amount_prefers_stored_total() {
        let mut purchase = FuelPurchase::new(day(1), FuelType::Diesel, dec!(100), dec!(150.5));
        assert_eq!(purchase.amount(), dec!(15050));

        purchase.total_amount = Some(dec!(15000));
        assert_eq!(purchase.amount(), dec!(15000));
    }

    #[test]
    fn test_levels_from_records() {
        let generator = GeneratorId::new();
        let levels = FuelStockLevels::from_records(
            FuelStockLevels {
                diesel: dec!(50),
                petrol: dec!(10),
            },
            &[
                FuelPurchase::new(day(1), FuelType::Diesel, dec!(200), dec!(150)),
                FuelPurchase::new(day(2), FuelType::Petrol, dec!(20), dec!(170)),
            ],
            &[FuelIssue::new(day(3), generator, FuelType::Diesel, dec!(75.5))],
        );

        assert_eq!(levels.diesel, dec!(174.5));
        assert_eq!(levels.petrol, dec!(30));
    }

    #[test]
    fn test_check_issue_rejects_overdraw() {
        let levels = FuelStockLevels {
            diesel: dec!(40),
            petrol: dec!(0),
        };

        assert_eq!(levels.check_issue(FuelType::Diesel, dec!(40)), Ok(dec!(0)));
        assert_eq!(
            levels.check_issue(FuelType::Diesel, dec!(40.1)),
            Err(StockError::InsufficientStock {
                fuel: FuelType::Diesel,
                available: dec!(40),
                requested: dec!(40.1),
            })
        );
        assert_eq!(
            levels.check_issue(FuelType::Petrol, dec!(0)),
            Err(StockError::NonPositiveQuantity(dec!(0)))
        );
    }

    #[test]
    fn test_apply_issue_and_purchase() {
        let mut levels = FuelStockLevels::default();
        let purchase = FuelPurchase::new(day(1), FuelType::Petrol, dec!(25), dec!(170));
        levels.apply_purchase(&purchase).unwrap();

        let issue = FuelIssue::new(day(2), GeneratorId::new(), FuelType::Petrol, dec!(10));
        assert_eq!(levels.apply_issue(&issue), Ok(dec!(15)));
        assert_eq!(levels.petrol, dec!(15));

        let too_much = FuelIssue::new(day(3), GeneratorId::new(), FuelType::Petrol, dec!(16));
        assert!(levels.apply_issue(&too_much).is_err());
        assert_eq!(levels.petrol, dec!(15));
    }
}
