//! Error bridging between the repository layer and the API surface

use crate::db::repository::RepoError;
use shared::error::{AppError, ErrorCode};

// Repository messages are already complete sentences, so this maps
// codes without re-wrapping the text.
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}
