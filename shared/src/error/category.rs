//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the thousands digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 4xxx: Reservation errors
/// - 6xxx: Product / cart errors
/// - 7xxx: Seat errors
/// - 8xxx: User errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Reservation errors (4xxx)
    Reservation,
    /// Product / cart errors (6xxx)
    Product,
    /// Seat errors (7xxx)
    Seat,
    /// User errors (8xxx)
    User,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            4000..5000 => Self::Reservation,
            6000..7000 => Self::Product,
            7000..8000 => Self::Seat,
            8000..9000 => Self::User,
            _ => Self::System,
        }
    }
}

impl From<ErrorCode> for ErrorCategory {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(
            ErrorCategory::from(ErrorCode::ValidationFailed),
            ErrorCategory::General
        );
        assert_eq!(
            ErrorCategory::from(ErrorCode::TokenExpired),
            ErrorCategory::Auth
        );
        assert_eq!(
            ErrorCategory::from(ErrorCode::SeatUnavailable),
            ErrorCategory::Reservation
        );
        assert_eq!(
            ErrorCategory::from(ErrorCode::DatabaseError),
            ErrorCategory::System
        );
    }
}
