//! HTTP status code mapping and axum response conversion

use super::codes::ErrorCode;
use super::types::{ApiResponse, AppError};
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::ReservationNotFound
            | Self::WalkInNotFound
            | Self::ProductNotFound
            | Self::CartItemNotFound
            | Self::SeatNotFound
            | Self::UserNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::SeatUnavailable
            | Self::ProductNameExists
            | Self::SeatNameExists
            | Self::UsernameExists => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::AccountDisabled => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied | Self::AdminRequired => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        // System errors are surfaced with a generic body; the specific
        // message stays in the server log only.
        let body = if status.is_server_error() {
            ApiResponse::<()>::error(&AppError::new(self.code))
        } else {
            ApiResponse::<()>::error(&self)
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::SeatNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::ReservationNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(
            ErrorCode::SeatUnavailable.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(ErrorCode::SeatNameExists.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_unauthorized_status() {
        assert_eq!(
            ErrorCode::NotAuthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorCode::TokenExpired.http_status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bad_request_default() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InvalidStatusTransition.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
