//! Axum extractor for the authenticated user

use axum::extract::FromRequestParts;
use http::request::Parts;
use shared::error::AppError;

use crate::auth::CurrentUser;

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(AppError::unauthorized)
    }
}
