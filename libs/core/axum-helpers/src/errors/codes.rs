//! Type-safe error codes for API responses.
//!
//! Every error body carries two identifiers:
//! - a SCREAMING_SNAKE_CASE string clients branch on (e.g. "VALIDATION_ERROR")
//! - an integer code used in structured logs (e.g. 1001)
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Invalid UUID format in path parameter
    InvalidUuid,

    /// Request body could not be parsed as JSON
    InvalidJson,

    /// Query string could not be parsed
    InvalidQuery,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current resource state
    Conflict,

    /// Generic malformed request
    BadRequest,

    // Server errors (1500-1599)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Database errors (2000-2999)
    /// Database query or driver failure
    DatabaseError,

    /// No pooled connection became available in time
    DatabasePoolTimeout,

    /// Database record not found
    DatabaseNotFound,

    // Upstream service errors (3000-3999)
    /// An upstream service answered with an error
    UpstreamUnavailable,

    /// An upstream service did not answer in time
    UpstreamTimeout,

    // Serialization errors (5000-5999)
    /// JSON serialization/deserialization error
    SerdeJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabasePoolTimeout => "DATABASE_POOL_TIMEOUT",
            Self::DatabaseNotFound => "DATABASE_NOT_FOUND",
            Self::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            Self::UpstreamTimeout => "UPSTREAM_TIMEOUT",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Integer code for structured logs.
    ///
    /// Ranges:
    /// - 1000-1499: client errors
    /// - 1500-1599: server errors
    /// - 2000-2999: database errors
    /// - 3000-3999: upstream service errors
    /// - 5000-5999: serialization errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::Conflict => 1005,
            Self::InvalidQuery => 1006,
            Self::BadRequest => 1007,

            Self::InternalError => 1500,
            Self::ServiceUnavailable => 1501,

            Self::DatabaseError => 2001,
            Self::DatabasePoolTimeout => 2002,
            Self::DatabaseNotFound => 2003,

            Self::UpstreamUnavailable => 3001,
            Self::UpstreamTimeout => 3002,

            Self::SerdeJsonError => 5001,
        }
    }

    /// Default user-facing message. Handlers usually override it with something specific.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidUuid => "Invalid UUID format",
            Self::InvalidJson => "Invalid JSON format",
            Self::InvalidQuery => "Invalid query string",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource already exists",
            Self::BadRequest => "Bad request",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::DatabaseError => "Database error occurred",
            Self::DatabasePoolTimeout => "Database connection pool timed out",
            Self::DatabaseNotFound => "Database record not found",
            Self::UpstreamUnavailable => "Upstream service is unavailable",
            Self::UpstreamTimeout => "Upstream service timed out",
            Self::SerdeJsonError => "JSON serialization error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::UpstreamTimeout.as_str(), "UPSTREAM_TIMEOUT");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::DatabaseError.code(), 2001);
        assert_eq!(ErrorCode::UpstreamUnavailable.code(), 3001);
    }

    #[test]
    fn test_error_code_display_matches_serde() {
        let code = ErrorCode::DatabasePoolTimeout;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, format!("\"{}\"", code));
    }

    #[test]
    fn test_error_code_deserialization() {
        let code: ErrorCode = serde_json::from_str("\"UPSTREAM_UNAVAILABLE\"").unwrap();
        assert_eq!(code, ErrorCode::UpstreamUnavailable);
    }
}
