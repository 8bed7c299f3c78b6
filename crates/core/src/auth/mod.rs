//! Role-based access and API-key authorization.
//!
//! This module provides:
//! - User roles and the features each role may open
//! - API-key metadata and per-endpoint scope checks

pub mod api_key;
pub mod error;

pub use api_key::{ApiEndpoint, ApiKey, ApiKeyLookup, authenticate, authorize, bearer_token};
pub use error::ApiKeyError;

use serde::{Deserialize, Serialize};

/// User roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Everything, including users and API keys.
    SuperAdmin,
    /// All operational screens.
    Admin,
    /// Hours, issues, stock and reports.
    Maintenance,
    /// Daily hour and issue entry.
    Operator,
    /// Read-only dashboards and reports.
    Viewer,
}

/// Application features a role may open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    /// Overview dashboard.
    Dashboard,
    /// Generator setup.
    Generators,
    /// Hour-meter entry.
    Hours,
    /// Daily hour report.
    DailyReport,
    /// Fuel purchases.
    Purchase,
    /// Fuel issues.
    Issue,
    /// Monthly stock check.
    Stock,
    /// Cost reports.
    Reports,
    /// User management.
    Users,
    /// API-key management.
    ApiKeys,
}

impl Feature {
    /// Every feature, in menu order.
    pub const ALL: [Self; 10] = [
        Self::Dashboard,
        Self::Generators,
        Self::Hours,
        Self::DailyReport,
        Self::Purchase,
        Self::Issue,
        Self::Stock,
        Self::Reports,
        Self::Users,
        Self::ApiKeys,
    ];
}

impl UserRole {
    /// Every role, most privileged first.
    pub const ALL: [Self; 5] = [
        Self::SuperAdmin,
        Self::Admin,
        Self::Maintenance,
        Self::Operator,
        Self::Viewer,
    ];

    /// Features this role may open, in menu order.
    #[must_use]
    pub const fn accessible_features(&self) -> &'static [Feature] {
        use Feature::{DailyReport, Dashboard, Generators, Hours, Issue, Purchase, Reports, Stock};
        match self {
            Self::SuperAdmin => &Feature::ALL,
            Self::Admin => &[
                Dashboard,
                Generators,
                Hours,
                DailyReport,
                Purchase,
                Issue,
                Stock,
                Reports,
            ],
            Self::Maintenance => &[Dashboard, Hours, DailyReport, Issue, Stock, Reports],
            Self::Operator => &[Dashboard, Hours, DailyReport, Issue],
            Self::Viewer => &[Dashboard, DailyReport, Reports],
        }
    }

    /// Whether this role may open `feature`.
    #[must_use]
    pub fn can_access(&self, feature: Feature) -> bool {
        self.accessible_features().contains(&feature)
    }

    /// Whether this role may open at least one of `features`.
    #[must_use]
    pub fn has_any_permission(&self, features: &[Feature]) -> bool {
        features.iter().any(|&f| self.can_access(f))
    }

    /// Returns true for the super administrator.
    #[must_use]
    pub const fn is_super_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "super_admin"),
            Self::Admin => write!(f, "admin"),
            Self::Maintenance => write!(f, "maintenance"),
            Self::Operator => write!(f, "operator"),
            Self::Viewer => write!(f, "viewer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_super_admin_sees_everything() {
        for feature in Feature::ALL {
            assert!(UserRole::SuperAdmin.can_access(feature));
        }
        assert!(UserRole::SuperAdmin.is_super_admin());
        assert!(!UserRole::Admin.is_super_admin());
    }

    #[rstest]
    #[case(UserRole::Admin, Feature::Purchase, true)]
    #[case(UserRole::Admin, Feature::Users, false)]
    #[case(UserRole::Admin, Feature::ApiKeys, false)]
    #[case(UserRole::Maintenance, Feature::Stock, true)]
    #[case(UserRole::Maintenance, Feature::Generators, false)]
    #[case(UserRole::Maintenance, Feature::Purchase, false)]
    #[case(UserRole::Operator, Feature::Issue, true)]
    #[case(UserRole::Operator, Feature::Reports, false)]
    #[case(UserRole::Viewer, Feature::Reports, true)]
    #[case(UserRole::Viewer, Feature::Hours, false)]
    fn test_can_access(#[case] role: UserRole, #[case] feature: Feature, #[case] expected: bool) {
        assert_eq!(role.can_access(feature), expected);
    }

    #[test]
    fn test_feature_counts() {
        let counts: Vec<usize> = UserRole::ALL
            .iter()
            .map(|r| r.accessible_features().len())
            .collect();
        assert_eq!(counts, vec![10, 8, 6, 4, 3]);
    }

    #[test]
    fn test_has_any_permission() {
        assert!(UserRole::Viewer.has_any_permission(&[Feature::Users, Feature::Reports]));
        assert!(!UserRole::Operator.has_any_permission(&[Feature::Stock, Feature::Reports]));
        assert!(!UserRole::Admin.has_any_permission(&[]));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&UserRole::SuperAdmin).unwrap(),
            "\"super_admin\""
        );
        assert_eq!(
            serde_json::to_string(&Feature::DailyReport).unwrap(),
            "\"daily-report\""
        );
        assert_eq!(UserRole::Maintenance.to_string(), "maintenance");
    }
}
