//! Stock-check persistence seam.

use std::collections::BTreeMap;
use std::sync::RwLock;

use genfleet_shared::FuelType;

use super::error::StockError;
use super::types::StockCheck;
use crate::calendar::{BsPeriod, FiscalYear};

/// Repository trait for stock-check persistence.
///
/// Implemented by whatever store backs the application; the in-memory
/// version below serves tests and the CLI.
pub trait StockCheckRepository: Send + Sync {
    /// The check for one fuel type and BS month, if recorded.
    fn find(&self, fuel: FuelType, period: BsPeriod) -> Result<Option<StockCheck>, StockError>;

    /// Stores a new check. Fails with [`StockError::AlreadyRecorded`] when the
    /// month already has one for that fuel.
    fn insert(&self, check: StockCheck) -> Result<StockCheck, StockError>;

    /// Checks of one fiscal year, oldest month first.
    fn list_fiscal_year(&self, fiscal_year: FiscalYear) -> Result<Vec<StockCheck>, StockError>;
}

/// Stock checks kept in memory, keyed by fuel type and month.
#[derive(Debug, Default)]
pub struct InMemoryStockCheckRepository {
    checks: RwLock<BTreeMap<(FuelType, BsPeriod), StockCheck>>,
}

impl InMemoryStockCheckRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StockError {
    StockError::Storage("stock check store lock poisoned".to_string())
}

impl StockCheckRepository for InMemoryStockCheckRepository {
    fn find(&self, fuel: FuelType, period: BsPeriod) -> Result<Option<StockCheck>, StockError> {
        let checks = self.checks.read().map_err(poisoned)?;
        Ok(checks.get(&(fuel, period)).cloned())
    }

    fn insert(&self, check: StockCheck) -> Result<StockCheck, StockError> {
        let mut checks = self.checks.write().map_err(poisoned)?;
        let key = (check.fuel_type, check.period);
        if checks.contains_key(&key) {
            return Err(StockError::AlreadyRecorded {
                fuel: check.fuel_type,
                period: check.period,
            });
        }
        checks.insert(key, check.clone());
        Ok(check)
    }

    fn list_fiscal_year(&self, fiscal_year: FiscalYear) -> Result<Vec<StockCheck>, StockError> {
        let checks = self.checks.read().map_err(poisoned)?;
        let mut found: Vec<StockCheck> = checks
            .values()
            .filter(|c| c.fiscal_year == fiscal_year)
            .cloned()
            .collect();
        found.sort_by_key(|c| (c.period, c.fuel_type));
        Ok(found)
    }
}
