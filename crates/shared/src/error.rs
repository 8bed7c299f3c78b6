//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Domain errors from the core crate convert into one of these variants so a
/// surrounding HTTP layer can render any failure uniformly.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing, unknown, inactive, or expired credentials.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Credentials are valid but lack the required permission.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Malformed input (bad date format, missing parameter, negative count).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation (e.g. issuing more fuel than is in stock).
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Conflict (e.g. a second stock check for the same period).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Persistence collaborator failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::Validation(_) => 400,
            Self::BusinessRule(_) => 422,
            Self::Conflict(_) => 409,
            Self::Storage(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns true for errors caused by the caller rather than the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
