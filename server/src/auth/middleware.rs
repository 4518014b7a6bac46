//! Authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::AppError;
use tracing::warn;

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;

/// Require a valid `Authorization: Bearer <token>` header.
///
/// On success the decoded [`CurrentUser`] lands in request extensions.
///
/// Skipped for:
/// - `OPTIONS *` (CORS preflight)
/// - paths outside `/api/` (health check, 404s)
/// - `/api/auth/login` and `/api/auth/register`
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    let is_public = path == "/api/auth/login" || path == "/api/auth/register";
    if is_public {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            warn!(uri = %req.uri(), "Request without authorization header");
            return Err(AppError::unauthorized());
        }
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(uri = %req.uri(), error = %e, "Token validation failed");
            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

/// Require the admin role, layered after [`require_auth`]
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(AppError::unauthorized)?;

    if !user.is_admin() {
        warn!(username = %user.username, "Admin endpoint denied");
        return Err(AppError::forbidden("Administrator role required"));
    }

    Ok(next.run(req).await)
}
