//! Fuel stock keeping and monthly reconciliation.
//!
//! Purchases add to the main store, issues to generators take from it, and
//! once a BS month a physical count is compared with what the books predict.

pub mod error;
pub mod reconcile;
pub mod repository;
pub mod service;
pub mod types;


pub use error::StockError;
pub use reconcile::{StockMovement, StockReconciliation, VarianceKind, opening_stock, reconcile};
pub use repository::{InMemoryStockCheckRepository, StockCheckRepository};
pub use service::StockService;
pub use types::{FuelIssue, FuelPurchase, FuelStockLevels, NewStockCheck, StockCheck};
