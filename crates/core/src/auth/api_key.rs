//! API keys for the external read-only endpoints.
//!
//! Hashing and storage live behind [`ApiKeyLookup`]; this module extracts the
//! bearer token and decides whether the key it names may call an endpoint.

use chrono::{DateTime, Utc};
use genfleet_shared::types::{ApiKeyId, UserId};
use serde::{Deserialize, Serialize};

use super::error::ApiKeyError;

/// Stored API-key metadata. The secret itself is never kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Unique identifier.
    pub id: ApiKeyId,
    /// Label shown in the key list.
    pub name: String,
    /// First characters of the secret, for recognising a key.
    pub key_prefix: String,
    /// Granted scopes, e.g. `read:reports`.
    pub permissions: Vec<String>,
    /// Revoked keys are inactive.
    pub is_active: bool,
    /// Optional expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Last successful use.
    pub last_used_at: Option<DateTime<Utc>>,
    /// Who issued the key.
    pub created_by: Option<UserId>,
    /// When the key was issued.
    pub created_at: DateTime<Utc>,
}

impl ApiKey {
    /// Creates an active, non-expiring key with the given scopes.
    #[must_use]
    pub fn new(name: impl Into<String>, key_prefix: impl Into<String>, permissions: &[&str]) -> Self {
        Self {
            id: ApiKeyId::new(),
            name: name.into(),
            key_prefix: key_prefix.into(),
            permissions: permissions.iter().map(|p| (*p).to_string()).collect(),
            is_active: true,
            expires_at: None,
            last_used_at: None,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    /// Whether the key has expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// Whether the key carries `scope`.
    #[must_use]
    pub fn has_scope(&self, scope: &str) -> bool {
        self.permissions.iter().any(|p| p == scope)
    }

    /// Stamps a successful use.
    pub fn record_use(&mut self, now: DateTime<Utc>) {
        self.last_used_at = Some(now);
    }
}

/// External read-only endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiEndpoint {
    /// Generator cost report.
    CostReport,
    /// Daily hour readings.
    HourReadings,
}

impl ApiEndpoint {
    /// Scopes that grant access; any one is enough.
    #[must_use]
    pub const fn accepted_scopes(&self) -> &'static [&'static str] {
        match self {
            Self::CostReport => &["read:reports", "reports:read"],
            Self::HourReadings => &["read:reports", "read:hours"],
        }
    }
}

impl std::fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CostReport => write!(f, "external-cost-report"),
            Self::HourReadings => write!(f, "external-hour-readings"),
        }
    }
}

/// Extracts the key from an `Authorization` header value.
///
/// # Errors
///
/// Returns [`ApiKeyError::MissingBearer`] unless the header is
/// `Bearer <non-empty key>`.
pub fn bearer_token(header: Option<&str>) -> Result<&str, ApiKeyError> {
    header
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(ApiKeyError::MissingBearer)
}

/// Finds the stored key a bearer token belongs to.
pub trait ApiKeyLookup: Send + Sync {
    /// The key matching `token`, if any.
    fn find_by_token(&self, token: &str) -> Option<ApiKey>;
}

/// Resolves the `Authorization` header to a stored key and checks it
/// against `endpoint`. On success the key's last use is stamped.
///
/// # Errors
///
/// Returns [`ApiKeyError::MissingBearer`] without a bearer token,
/// [`ApiKeyError::UnknownKey`] when no stored key matches, and whatever
/// [`authorize`] refuses.
pub fn authenticate<L: ApiKeyLookup>(
    lookup: &L,
    header: Option<&str>,
    endpoint: ApiEndpoint,
    now: DateTime<Utc>,
) -> Result<ApiKey, ApiKeyError> {
    let token = bearer_token(header)?;
    let Some(mut key) = lookup.find_by_token(token) else {
        tracing::warn!(%endpoint, "unknown API key used");
        return Err(ApiKeyError::UnknownKey);
    };
    authorize(&key, endpoint, now)?;
    key.record_use(now);
    Ok(key)
}

/// Decides whether `key` may call `endpoint` at `now`.
///
/// # Errors
///
/// Returns an error if the key is inactive, expired, or has none of the
/// endpoint's accepted scopes.
pub fn authorize(key: &ApiKey, endpoint: ApiEndpoint, now: DateTime<Utc>) -> Result<(), ApiKeyError> {
    if !key.is_active {
        tracing::warn!(key = %key.key_prefix, %endpoint, "inactive API key used");
        return Err(ApiKeyError::Inactive);
    }
    if key.is_expired(now) {
        tracing::warn!(key = %key.key_prefix, %endpoint, "expired API key used");
        return Err(ApiKeyError::Expired);
    }
    if !endpoint
        .accepted_scopes()
        .iter()
        .any(|scope| key.has_scope(scope))
    {
        tracing::warn!(key = %key.key_prefix, %endpoint, "API key lacks scope");
        return Err(ApiKeyError::InsufficientScope(endpoint));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use genfleet_shared::AppError;
    use rstest::rstest;
    use std::collections::HashMap;

    struct Keys(HashMap<&'static str, ApiKey>);

    impl ApiKeyLookup for Keys {
        fn find_by_token(&self, token: &str) -> Option<ApiKey> {
            self.0.get(token).cloned()
        }
    }

    fn keys() -> Keys {
        let mut revoked = ApiKey::new("old", "gf_old", &["read:reports"]);
        revoked.is_active = false;
        Keys(HashMap::from([
            ("gf_live_abc", ApiKey::new("erp", "gf_live", &["read:hours"])),
            ("gf_old_xyz", revoked),
        ]))
    }

    #[test]
    fn test_authenticate_known_key() {
        let now = Utc::now();
        let key = authenticate(&keys(), Some("Bearer gf_live_abc"), ApiEndpoint::HourReadings, now)
            .unwrap();
        assert_eq!(key.name, "erp");
        assert_eq!(key.last_used_at, Some(now));
    }

    #[rstest]
    #[case(None, ApiEndpoint::HourReadings, ApiKeyError::MissingBearer)]
    #[case(Some("Bearer gf_nope"), ApiEndpoint::HourReadings, ApiKeyError::UnknownKey)]
    #[case(Some("Bearer gf_old_xyz"), ApiEndpoint::CostReport, ApiKeyError::Inactive)]
    #[case(
        Some("Bearer gf_live_abc"),
        ApiEndpoint::CostReport,
        ApiKeyError::InsufficientScope(ApiEndpoint::CostReport)
    )]
    fn test_authenticate_refusals(
        #[case] header: Option<&str>,
        #[case] endpoint: ApiEndpoint,
        #[case] expected: ApiKeyError,
    ) {
        assert_eq!(authenticate(&keys(), header, endpoint, Utc::now()), Err(expected));
    }

    #[rstest]
    #[case(Some("Bearer gf_live_abc"), Ok("gf_live_abc"))]
    #[case(Some("Bearer   gf_1  "), Ok("gf_1"))]
    #[case(Some("Bearer "), Err(ApiKeyError::MissingBearer))]
    #[case(Some("Basic dXNlcg=="), Err(ApiKeyError::MissingBearer))]
    #[case(Some("bearer gf_1"), Err(ApiKeyError::MissingBearer))]
    #[case(None, Err(ApiKeyError::MissingBearer))]
    fn test_bearer_token(#[case] header: Option<&str>, #[case] expected: Result<&str, ApiKeyError>) {
        assert_eq!(bearer_token(header), expected);
    }

    #[rstest]
    #[case(&["read:reports"], ApiEndpoint::CostReport, true)]
    #[case(&["reports:read"], ApiEndpoint::CostReport, true)]
    #[case(&["read:hours"], ApiEndpoint::CostReport, false)]
    #[case(&["read:reports"], ApiEndpoint::HourReadings, true)]
    #[case(&["read:hours"], ApiEndpoint::HourReadings, true)]
    #[case(&["reports:read"], ApiEndpoint::HourReadings, false)]
    #[case(&[], ApiEndpoint::HourReadings, false)]
    fn test_scopes(
        #[case] scopes: &[&str],
        #[case] endpoint: ApiEndpoint,
        #[case] allowed: bool,
    ) {
        let key = ApiKey::new("erp", "gf_1", scopes);
        let result = authorize(&key, endpoint, Utc::now());
        if allowed {
            assert_eq!(result, Ok(()));
        } else {
            assert_eq!(result, Err(ApiKeyError::InsufficientScope(endpoint)));
        }
    }

    #[test]
    fn test_inactive_and_expired_keys() {
        let now = Utc::now();
        let mut key = ApiKey::new("erp", "gf_1", &["read:reports"]);

        key.expires_at = Some(now - Duration::minutes(1));
        assert_eq!(authorize(&key, ApiEndpoint::CostReport, now), Err(ApiKeyError::Expired));

        key.expires_at = Some(now + Duration::days(30));
        assert_eq!(authorize(&key, ApiEndpoint::CostReport, now), Ok(()));

        key.is_active = false;
        assert_eq!(authorize(&key, ApiEndpoint::CostReport, now), Err(ApiKeyError::Inactive));
    }

    #[test]
    fn test_errors_map_to_status() {
        assert_eq!(AppError::from(ApiKeyError::Expired).status_code(), 401);
        assert_eq!(AppError::from(ApiKeyError::MissingBearer).status_code(), 401);
        assert_eq!(
            AppError::from(ApiKeyError::InsufficientScope(ApiEndpoint::CostReport)).status_code(),
            403
        );
    }

    #[test]
    fn test_record_use() {
        let now = Utc::now();
        let mut key = ApiKey::new("erp", "gf_1", &["read:reports"]);
        key.record_use(now);
        assert_eq!(key.last_used_at, Some(now));
    }
}
