//! API routes
//!
//! One module per resource, each exposing `router()`:
//!
//! - [`health`] - liveness probe
//! - [`auth`] - login, registration, current user
//! - [`seats`] - seat management and the availability map
//! - [`reservations`] - booking, lifecycle, extension
//! - [`walk_ins`] - admin walk-in management
//! - [`products`] - menu management
//! - [`cart`] - per-customer cart
//! - [`statistics`] - admin dashboards
//! - [`sync`] - resource version polling

pub mod auth;
pub mod cart;
pub mod health;
pub mod products;
pub mod reservations;
pub mod seats;
pub mod statistics;
pub mod sync;
pub mod walk_ins;

use axum::Router;
use shared::error::AppError;
use surrealdb::RecordId;

use crate::auth::CurrentUser;
use crate::core::ServerState;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(seats::router())
        .merge(reservations::router())
        .merge(walk_ins::router())
        .merge(products::router())
        .merge(cart::router())
        .merge(statistics::router())
        .merge(sync::router())
        .with_state(state)
}

/// Parse the authenticated user's id back into a record id
pub(crate) fn user_record(user: &CurrentUser) -> Result<RecordId, AppError> {
    user.id
        .parse()
        .map_err(|_| AppError::invalid_token("Malformed user id in token"))
}
