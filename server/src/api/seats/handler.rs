//! Seat API handlers
//!
//! The list endpoint is the availability map: every seat comes back
//! with its reservation history and a status derived for the queried
//! instant. Status is computed here, never read from storage.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::types::SeatStatus;

use crate::availability;
use crate::core::ServerState;
use crate::db::models::{Reservation, Seat, SeatCreate, SeatUpdate, WalkIn};

const RESOURCE: &str = "seat";

/// Seat with embedded history and derived status
#[derive(Debug, Serialize)]
pub struct SeatView {
    #[serde(flatten)]
    pub seat: Seat,
    pub status: SeatStatus,
    pub reservations: Vec<Reservation>,
    pub walk_ins: Vec<WalkIn>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Instant to evaluate status at, defaults to now
    pub at: Option<DateTime<Utc>>,
}

async fn seat_view(state: &ServerState, seat: Seat, at: DateTime<Utc>) -> AppResult<SeatView> {
    let seat_ref = seat
        .id
        .as_ref()
        .ok_or_else(|| AppError::internal("Seat row without id"))?;

    let reservations = state.db.reservations().find_for_seat(seat_ref).await?;
    let walk_ins = state.db.walk_ins().find_for_seat(seat_ref).await?;

    let reservation_intervals: Vec<_> = reservations.iter().map(Reservation::interval).collect();
    let walk_in_intervals: Vec<_> = walk_ins.iter().map(WalkIn::interval).collect();
    let status = availability::seat_status(&reservation_intervals, &walk_in_intervals, at);

    Ok(SeatView {
        seat,
        status,
        reservations,
        walk_ins,
    })
}

/// GET /api/seats?at=... - all active seats with derived status
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<Vec<SeatView>>> {
    let at = query.at.unwrap_or_else(Utc::now);
    let seats = state.db.seats().find_all().await?;

    let mut views = Vec::with_capacity(seats.len());
    for seat in seats {
        views.push(seat_view(&state, seat, at).await?);
    }
    Ok(Json(views))
}

/// GET /api/seats/:id?at=... - one seat with derived status
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<SeatView>> {
    let at = query.at.unwrap_or_else(Utc::now);
    let seat = state
        .db
        .seats()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::SeatNotFound, format!("Seat {} not found", id))
        })?;
    Ok(Json(seat_view(&state, seat, at).await?))
}

/// POST /api/seats - create a seat (admin)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SeatCreate>,
) -> AppResult<Json<Seat>> {
    let seat = state.db.seats().create(payload).await?;
    state.bump_version(RESOURCE);
    Ok(Json(seat))
}

/// PUT /api/seats/:id - update a seat (admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SeatUpdate>,
) -> AppResult<Json<Seat>> {
    let seat = state.db.seats().update(&id, payload).await?;
    state.bump_version(RESOURCE);
    Ok(Json(seat))
}

/// DELETE /api/seats/:id - delete a seat (admin)
///
/// Rejected while any reservation, in any status, still references the
/// seat; history must stay resolvable.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let seat = state
        .db
        .seats()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::SeatNotFound, format!("Seat {} not found", id))
        })?;

    let seat_ref = seat
        .id
        .as_ref()
        .ok_or_else(|| AppError::internal("Seat row without id"))?;
    if state.db.reservations().any_for_seat(seat_ref).await? {
        return Err(AppError::with_message(
            ErrorCode::SeatInUse,
            format!("Seat '{}' is referenced by reservations", seat.name),
        ));
    }

    let result = state.db.seats().delete(&id).await?;
    state.bump_version(RESOURCE);
    Ok(Json(result))
}
