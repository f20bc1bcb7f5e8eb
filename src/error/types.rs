/**
 * API Error Types
 *
 * This module defines the single error type returned by all handlers.
 * Each variant maps to exactly one HTTP status code, so the full
 * observable error contract of the service is this file.
 *
 * # Status Code Mapping
 *
 * - `InvalidInput`       - 400 Bad Request
 * - `Unauthorized`       - 401 Unauthorized
 * - `InvalidCredentials` - 401 Unauthorized
 * - `Forbidden`          - 403 Forbidden
 * - `NotFound`           - 404 Not Found
 * - `Conflict`           - 409 Conflict
 * - `Internal`           - 500 Internal Server Error
 *
 * # Information Leakage
 *
 * Client-facing messages are deliberately generic: `Unauthorized` never
 * says whether a token was expired or forged, and `InvalidCredentials`
 * never says whether the email exists. Internal failures are logged
 * server-side at the point they occur; the client only sees a generic
 * message.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Service-wide error type
///
/// Returned by every handler. Implements `IntoResponse` (see
/// `conversion.rs`) so handlers can use `Result<Json<T>, ApiError>`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed or semantically invalid request data
    ///
    /// The message is generic on purpose; field-level detail is never
    /// returned to the client.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing, malformed, or unverifiable bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Signin mismatch: unknown email or wrong password
    ///
    /// The two causes are indistinguishable in the response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated caller does not own the resource
    #[error("{0}")]
    Forbidden(String),

    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation (email already registered)
    #[error("{0}")]
    Conflict(String),

    /// Unexpected store or signing failure
    ///
    /// Detail is logged server-side where the failure occurred.
    #[error("Something went wrong")]
    Internal,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Create an `InvalidInput` error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a `NotFound` error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Map a store failure, surfacing unique-constraint violations
    ///
    /// Signup must distinguish a duplicate email (409) from an
    /// unexpected store failure (500), so insertions route their
    /// `sqlx::Error` through here. Any other database error is logged
    /// and collapsed to `Internal`.
    pub fn from_store_unique(err: sqlx::Error, conflict_message: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::Conflict(conflict_message.to_string())
            }
            _ => {
                tracing::error!("store error: {err:?}");
                Self::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::invalid_input("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("no".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("dup".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_credentials_message_is_uniform() {
        // Unknown email and wrong password must produce identical output.
        assert_eq!(
            ApiError::InvalidCredentials.message(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_unauthorized_message_hides_cause() {
        assert_eq!(ApiError::Unauthorized.message(), "Unauthorized");
    }

    #[test]
    fn test_internal_message_is_generic() {
        let error = ApiError::Internal;
        assert!(!error.message().contains("sqlx"));
        assert_eq!(error.message(), "Something went wrong");
    }

    #[test]
    fn test_from_store_unique_falls_back_to_internal() {
        let error = ApiError::from_store_unique(sqlx::Error::RowNotFound, "dup");
        assert_eq!(error, ApiError::Internal);
    }
}
