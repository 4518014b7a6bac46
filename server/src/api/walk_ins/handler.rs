//! Walk-in API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use surrealdb::RecordId;
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::WalkIn;
use crate::reservations::{CreateWalkIn, ReservationWriter};

const RESOURCE: &str = "walk_in";

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict to one seat ("seat:xxx")
    pub seat_id: Option<String>,
}

/// GET /api/walk-ins - all walk-ins, newest first; `?seat_id=` filters to one seat
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<WalkIn>>> {
    let repo = state.db.walk_ins();
    let rows = match query.seat_id {
        Some(raw) => {
            let seat: RecordId = raw
                .parse()
                .map_err(|_| AppError::validation(format!("Invalid seat ID: {}", raw)))?;
            repo.find_for_seat(&seat).await?
        }
        None => repo.find_all().await?,
    };
    Ok(Json(rows))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWalkInRequest {
    pub seat_id: String,
    #[validate(range(min = 1, max = 50))]
    pub guest_count: i32,
    /// Defaults to now
    pub start_time: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

/// POST /api/walk-ins - seat a walk-in party
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateWalkInRequest>,
) -> AppResult<Json<WalkIn>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let writer = ReservationWriter::from_state(&state);
    let walk_in = writer
        .create_walk_in(CreateWalkIn {
            seat_id: payload.seat_id,
            guest_count: payload.guest_count,
            start_time: payload.start_time,
            note: payload.note,
        })
        .await?;
    Ok(Json(walk_in))
}

/// DELETE /api/walk-ins/:id - party left, free the seat
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state
        .db
        .walk_ins()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::WalkInNotFound, format!("Walk-in {} not found", id))
        })?;

    let result = state.db.walk_ins().delete(&id).await?;
    state.bump_version(RESOURCE);
    Ok(Json(result))
}
