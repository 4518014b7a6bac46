//! Unified error codes for the Latte platform
//!
//! Error codes are shared between server and frontend and organized by
//! category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Reservation errors
//! - 6xxx: Product / cart errors
//! - 7xxx: Seat errors
//! - 8xxx: User errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes are represented as u16 values for efficient serialization and
/// cross-language compatibility (Rust, TypeScript).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2002,

    // ==================== 4xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 4001,
    /// Seat is unavailable for the requested window
    SeatUnavailable = 4002,
    /// Status transition is not allowed
    InvalidStatusTransition = 4003,
    /// Reservation already reached a terminal status
    ReservationClosed = 4004,
    /// Walk-in not found
    WalkInNotFound = 4005,

    // ==================== 6xxx: Product / Cart ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product name already exists
    ProductNameExists = 6002,
    /// Cart item not found
    CartItemNotFound = 6003,
    /// Cart is empty
    CartEmpty = 6004,

    // ==================== 7xxx: Seat ====================
    /// Seat not found
    SeatNotFound = 7001,
    /// Seat name already exists
    SeatNameExists = 7002,
    /// Seat is referenced by existing reservations
    SeatInUse = 7003,

    // ==================== 8xxx: User ====================
    /// User not found
    UserNotFound = 8001,
    /// Username already exists
    UsernameExists = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database / persistence error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::NotAuthenticated => "Please login first",
            Self::InvalidCredentials => "Invalid username or password",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",
            Self::AccountDisabled => "Account has been disabled",

            Self::PermissionDenied => "Permission denied",
            Self::AdminRequired => "Admin role required",

            Self::ReservationNotFound => "Reservation not found",
            Self::SeatUnavailable => "Seat is unavailable for the selected time",
            Self::InvalidStatusTransition => "Status transition not allowed",
            Self::ReservationClosed => "Reservation is already closed",
            Self::WalkInNotFound => "Walk-in not found",

            Self::ProductNotFound => "Product not found",
            Self::ProductNameExists => "Product name already exists",
            Self::CartItemNotFound => "Cart item not found",
            Self::CartEmpty => "Cart is empty",

            Self::SeatNotFound => "Seat not found",
            Self::SeatNameExists => "Seat name already exists",
            Self::SeatInUse => "Seat is referenced by existing reservations",

            Self::UserNotFound => "User not found",
            Self::UsernameExists => "Username already exists",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
        }
    }

    /// Numeric value of the code
    pub fn value(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.value())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,

            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            1005 => Self::AccountDisabled,

            2001 => Self::PermissionDenied,
            2002 => Self::AdminRequired,

            4001 => Self::ReservationNotFound,
            4002 => Self::SeatUnavailable,
            4003 => Self::InvalidStatusTransition,
            4004 => Self::ReservationClosed,
            4005 => Self::WalkInNotFound,

            6001 => Self::ProductNotFound,
            6002 => Self::ProductNameExists,
            6003 => Self::CartItemNotFound,
            6004 => Self::CartEmpty,

            7001 => Self::SeatNotFound,
            7002 => Self::SeatNameExists,
            7003 => Self::SeatInUse,

            8001 => Self::UserNotFound,
            8002 => Self::UsernameExists,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::ConfigError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_u16() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::SeatUnavailable,
            ErrorCode::DatabaseError,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw).unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(ErrorCode::try_from(4242).is_err());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "E0002");
        assert_eq!(ErrorCode::SeatUnavailable.to_string(), "E4002");
    }
}
