//! Typed IDs for fleet records.
//!
//! A `GeneratorId` cannot be passed where a `StockCheckId` is expected, even
//! though both are UUIDs in storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generates a fresh time-ordered (v7) ID.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wraps an ID read back from storage.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

typed_id!(UserId, "Unique identifier for a user.");
typed_id!(GeneratorId, "Unique identifier for a generator.");
typed_id!(HourReadingId, "Unique identifier for an hour-meter reading.");
typed_id!(FuelPurchaseId, "Unique identifier for a fuel purchase.");
typed_id!(FuelIssueId, "Unique identifier for a fuel issue.");
typed_id!(StockCheckId, "Unique identifier for a monthly stock check.");
typed_id!(ApiKeyId, "Unique identifier for an external API key.");
