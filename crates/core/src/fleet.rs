//! Generators in the fleet.

use chrono::{DateTime, NaiveDate, Utc};
use genfleet_shared::FuelType;
use genfleet_shared::types::{GeneratorId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A generator whose hours and fuel are tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generator {
    /// Unique identifier.
    pub id: GeneratorId,
    /// Display name.
    pub name: String,
    /// Asset tag painted on the unit, if any.
    pub code: Option<String>,
    /// Where the unit is installed.
    pub location: Option<String>,
    /// Rated capacity in kVA.
    pub capacity_kva: Option<Decimal>,
    /// Fuel the unit burns.
    pub fuel_type: FuelType,
    /// Date tracking started.
    pub start_date: NaiveDate,
    /// Hour-meter value when tracking started.
    pub initial_hour_reading: Decimal,
    /// Litres in the unit's tank when tracking started.
    pub initial_fuel_stock: Option<Decimal>,
    /// Inactive units are hidden from entry screens and reports.
    pub is_active: bool,
    /// Who registered the unit.
    pub created_by: Option<UserId>,
    /// When the unit was registered.
    pub created_at: DateTime<Utc>,
}

impl Generator {
    /// Registers a new active generator.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        fuel_type: FuelType,
        start_date: NaiveDate,
        initial_hour_reading: Decimal,
    ) -> Self {
        Self {
            id: GeneratorId::new(),
            name: name.into(),
            code: None,
            location: None,
            capacity_kva: None,
            fuel_type,
            start_date,
            initial_hour_reading,
            initial_fuel_stock: None,
            is_active: true,
            created_by: None,
            created_at: Utc::now(),
        }
    }
}
