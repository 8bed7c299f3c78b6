//! Common types used across the application.

pub mod fuel;
pub mod id;
pub mod range;

pub use fuel::FuelType;
pub use id::*;
pub use range::DateRange;

#[cfg(test)]
mod id_tests;
