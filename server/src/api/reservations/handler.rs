//! Reservation API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::error::{AppError, AppResult};
use shared::types::ReservationStatus;
use validator::Validate;

use super::super::user_record;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::Reservation;
use crate::reservations::{CreateReservation, ReservationWriter};

fn is_owner(reservation: &Reservation, user: &CurrentUser) -> bool {
    reservation
        .customer
        .as_ref()
        .map(|c| c.to_string() == user.id)
        .unwrap_or(false)
}

async fn load_visible(
    state: &ServerState,
    id: &str,
    user: &CurrentUser,
) -> AppResult<Reservation> {
    let reservation = state
        .db
        .reservations()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {}", id)))?;

    if !user.is_admin() && !is_owner(&reservation, user) {
        return Err(AppError::forbidden("Not your reservation"));
    }
    Ok(reservation)
}

/// GET /api/reservations - admin: all, customer: own
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Reservation>>> {
    let rows = if user.is_admin() {
        state.db.reservations().find_all().await?
    } else {
        let customer = user_record(&user)?;
        state.db.reservations().find_for_customer(&customer).await?
    };
    Ok(Json(rows))
}

/// GET /api/reservations/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    Ok(Json(load_visible(&state, &id, &user).await?))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub seat_ids: Vec<String>,
    #[validate(range(min = 1, max = 50))]
    pub guest_count: i32,
    pub start_time: Option<DateTime<Utc>>,
}

/// POST /api/reservations - book seats, consuming the caller's cart
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CreateReservationRequest>,
) -> AppResult<Json<Reservation>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let customer = user_record(&user)?;
    let writer = ReservationWriter::from_state(&state);
    let reservation = writer
        .create_reservation(
            customer,
            CreateReservation {
                seat_ids: payload.seat_ids,
                guest_count: payload.guest_count,
                start_time: payload.start_time,
            },
        )
        .await?;
    Ok(Json(reservation))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ReservationStatus,
}

/// PUT /api/reservations/:id/status - move along the lifecycle
///
/// Admins drive the forward path; customers may only cancel their own
/// reservation, and only while the lifecycle still allows it.
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<Reservation>> {
    let reservation = load_visible(&state, &id, &user).await?;

    if !user.is_admin() {
        if payload.status != ReservationStatus::Canceled {
            return Err(AppError::forbidden(
                "Only cancellation is available to customers",
            ));
        }
        if !is_owner(&reservation, &user) {
            return Err(AppError::forbidden("Not your reservation"));
        }
    }

    let writer = ReservationWriter::from_state(&state);
    Ok(Json(writer.transition_status(&id, payload.status).await?))
}

#[derive(Debug, Deserialize)]
pub struct ExtendRequest {
    pub end_time: DateTime<Utc>,
}

/// PUT /api/reservations/:id/end-time - extend the stay
pub async fn extend_end_time(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<ExtendRequest>,
) -> AppResult<Json<Reservation>> {
    load_visible(&state, &id, &user).await?;

    let writer = ReservationWriter::from_state(&state);
    Ok(Json(writer.extend_end_time(&id, payload.end_time).await?))
}

#[derive(Debug, Deserialize, Validate)]
pub struct PaymentProofRequest {
    /// URL of the uploaded proof on the external image host
    #[validate(url)]
    pub payment_proof: String,
}

/// PUT /api/reservations/:id/payment-proof - attach a payment proof
pub async fn attach_payment_proof(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<PaymentProofRequest>,
) -> AppResult<Json<Reservation>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let reservation = load_visible(&state, &id, &user).await?;
    if reservation.status.is_terminal() {
        return Err(AppError::validation(
            "Cannot attach payment proof to a closed reservation",
        ));
    }

    let updated = state
        .db
        .reservations()
        .set_payment_proof(&id, &payload.payment_proof)
        .await?;
    state.bump_version("reservation");
    Ok(Json(updated))
}
