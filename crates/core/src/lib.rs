//! Core business logic for Genfleet.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `calendar` - Bikram Sambat conversion and Nepal fiscal years
//! - `stock` - Fuel stock levels and monthly reconciliation
//! - `hour_meter` - Hour-meter readings and `H:MM` notation
//! - `reports` - Generator cost and hour-reading reports
//! - `auth` - Role permissions and API-key authorization
//! - `fleet` - Generator records

pub mod auth;
pub mod calendar;
pub mod fleet;
pub mod hour_meter;
pub mod reports;
pub mod stock;
