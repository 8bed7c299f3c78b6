//! API-key authorization errors.

use genfleet_shared::AppError;
use thiserror::Error;

use super::api_key::ApiEndpoint;

/// Why an API request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    /// No `Authorization: Bearer <key>` header.
    #[error("Missing or invalid Authorization header")]
    MissingBearer,

    /// No stored key matches.
    #[error("Invalid or expired API key")]
    UnknownKey,

    /// The key was revoked.
    #[error("API key is inactive")]
    Inactive,

    /// The key is past its expiry.
    #[error("API key has expired")]
    Expired,

    /// The key lacks every scope the endpoint accepts.
    #[error("Insufficient permissions for {0}")]
    InsufficientScope(ApiEndpoint),
}

impl From<ApiKeyError> for AppError {
    fn from(err: ApiKeyError) -> Self {
        match err {
            ApiKeyError::InsufficientScope(_) => Self::Forbidden(err.to_string()),
            _ => Self::Unauthorized(err.to_string()),
        }
    }
}
