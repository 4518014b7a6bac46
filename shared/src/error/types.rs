//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// The primary error type for the platform, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create a seat-unavailable conflict error
    pub fn seat_unavailable(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::SeatUnavailable, msg)
    }

    /// Create a not authenticated error
    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Create an invalid token error
    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, msg)
    }

    /// Create a token expired error
    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    /// Create a permission denied error
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database / persistence error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an already exists error
    pub fn already_exists(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::AlreadyExists, format!("{} already exists", r))
            .with_detail("resource", r)
    }

    /// Whether this error is a server-side fault (5xx)
    pub fn is_system_error(&self) -> bool {
        self.http_status().is_server_error()
    }
}

/// Unified API response envelope
///
/// ```json
/// { "code": 0, "message": "Success", "data": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 = success)
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Payload (absent on errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Structured details (absent on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Build a success response
    pub fn success(data: T) -> Self {
        Self {
            code: ErrorCode::Success,
            message: ErrorCode::Success.message().to_string(),
            data: Some(data),
            details: None,
        }
    }

    /// Build an error response from an [`AppError`]
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code,
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let err = AppError::new(ErrorCode::SeatUnavailable);
        assert_eq!(err.message, "Seat is unavailable for the selected time");
    }

    #[test]
    fn test_detail_accumulation() {
        let err = AppError::validation("bad field")
            .with_detail("field", "start_time")
            .with_detail("reason", "past");
        let details = err.details.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details["field"], "start_time");
    }

    #[test]
    fn test_response_envelope() {
        let err = AppError::not_found("Seat seat:1");
        let resp = ApiResponse::<()>::error(&err);
        assert_eq!(resp.code, ErrorCode::NotFound);
        assert!(resp.data.is_none());
    }
}
