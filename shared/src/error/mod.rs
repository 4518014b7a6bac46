//! Unified error system for the Latte platform
//!
//! - [`ErrorCode`]: standardized error codes for all error types
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: rich error type with codes, messages, and details
//! - [`ApiResponse`]: unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Reservation errors
//! - 6xxx: Product / cart errors
//! - 7xxx: Seat errors
//! - 8xxx: User errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::validation("Please select a start time")
//!     .with_detail("field", "start_time");
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, ErrorCode::ValidationFailed);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
