//! Utilities
//!
//! Logging, error bridging and request-scoped persistence timeouts.

pub mod error;
pub mod logger;

use shared::error::AppError;
use std::future::Future;
use std::time::Duration;

/// Bound a persistence operation by the configured request timeout.
///
/// A write that outlives the timeout surfaces as a database error so
/// the client sees a clean failure instead of a hung request.
pub async fn with_timeout<F, T>(limit_ms: u64, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(Duration::from_millis(limit_ms), fut).await {
        Ok(result) => result,
        Err(_) => Err(AppError::database(format!(
            "Persistence timed out after {}ms",
            limit_ms
        ))),
    }
}
