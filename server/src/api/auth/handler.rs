//! Auth API handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::client::{LoginRequest, LoginResponse, UserInfo};
use shared::error::{AppError, AppResult};
use shared::types::Role;
use tracing::info;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{User, UserCreate};

fn user_info(user: &User) -> AppResult<UserInfo> {
    Ok(UserInfo {
        id: user
            .id
            .as_ref()
            .map(|id| id.to_string())
            .ok_or_else(|| AppError::internal("User row without id"))?,
        username: user.username.clone(),
        display_name: user.display_name.clone(),
        role: user.role,
    })
}

/// POST /api/auth/login - exchange credentials for a token
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // Single failure message so usernames cannot be enumerated
    let invalid = || AppError::invalid("Invalid username or password");

    let user = state
        .db
        .users()
        .find_by_username(&payload.username)
        .await?
        .ok_or_else(invalid)?;

    if !user.is_active {
        return Err(invalid());
    }

    let verified = user
        .verify_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
    if !verified {
        return Err(invalid());
    }

    let info = user_info(&user)?;
    let token = state
        .jwt_service
        .generate_token(&info.id, &info.username, info.role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {}", e)))?;

    info!(username = %info.username, "User logged in");
    Ok(Json(LoginResponse { token, user: info }))
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    pub display_name: Option<String>,
}

/// POST /api/auth/register - create a customer account
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<UserInfo>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .db
        .users()
        .create(UserCreate {
            username: payload.username,
            password: payload.password,
            display_name: payload.display_name,
            role: Role::Customer,
        })
        .await?;

    info!(username = %user.username, "Customer registered");
    Ok(Json(user_info(&user)?))
}

/// GET /api/auth/me - the authenticated user
pub async fn me(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<UserInfo>> {
    let user = state
        .db
        .users()
        .find_by_id(&current.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {}", current.id)))?;
    Ok(Json(user_info(&user)?))
}
