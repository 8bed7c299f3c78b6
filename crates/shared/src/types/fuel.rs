//! Fuel types tracked by the stock ledger.

use serde::{Deserialize, Serialize};

/// Fuel a generator burns; stock is kept separately per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    /// Diesel.
    Diesel,
    /// Petrol.
    Petrol,
}

impl FuelType {
    /// Every fuel type, in display order.
    pub const ALL: [Self; 2] = [Self::Diesel, Self::Petrol];

    /// Storage/wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diesel => "diesel",
            Self::Petrol => "petrol",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diesel" => Ok(Self::Diesel),
            "petrol" => Ok(Self::Petrol),
            other => Err(format!("unknown fuel type: {other}")),
        }
    }
}
