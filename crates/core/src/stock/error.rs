//! Stock error types.

use genfleet_shared::{AppError, FuelType};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::calendar::BsPeriod;

/// Errors from stock-keeping operations.
///
/// Reconciliation arithmetic never fails; these come from validating user
/// input and from the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    /// Physical count below zero.
    #[error("Physical stock count cannot be negative: {0}")]
    NegativePhysicalCount(Decimal),

    /// Purchase or issue quantity of zero or less.
    #[error("Quantity must be greater than zero: {0}")]
    NonPositiveQuantity(Decimal),

    /// Issue larger than the stock on hand.
    #[error("Insufficient {fuel} stock: {available} L available, {requested} L requested")]
    InsufficientStock {
        /// Fuel type being issued.
        fuel: FuelType,
        /// Litres on hand.
        available: Decimal,
        /// Litres requested.
        requested: Decimal,
    },

    /// A check already exists for this fuel type and month.
    #[error("Stock check already recorded for {fuel} in {period}")]
    AlreadyRecorded {
        /// Fuel type.
        fuel: FuelType,
        /// BS month.
        period: BsPeriod,
    },

    /// Persistence collaborator failure.
    #[error("Stock storage error: {0}")]
    Storage(String),
}

impl From<StockError> for AppError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::NegativePhysicalCount(_) | StockError::NonPositiveQuantity(_) => {
                Self::Validation(err.to_string())
            }
            StockError::InsufficientStock { .. } => Self::BusinessRule(err.to_string()),
            StockError::AlreadyRecorded { .. } => Self::Conflict(err.to_string()),
            StockError::Storage(msg) => Self::Storage(msg),
        }
    }
}
