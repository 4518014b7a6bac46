//! Shared types for the Latte café platform
//!
//! Common types used by the server and client crates: error codes,
//! unified error/response structures, and domain enums.

pub mod client;
pub mod error;
pub mod types;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use types::{ReservationStatus, Role, SeatStatus};
