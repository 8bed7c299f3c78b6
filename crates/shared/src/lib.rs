//! Shared types, errors, and configuration for Genfleet.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Fuel types and inclusive Gregorian date ranges
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CalendarConfig, LoggingConfig, ReportConfig};
pub use error::{AppError, AppResult};
pub use types::{DateRange, FuelType};
