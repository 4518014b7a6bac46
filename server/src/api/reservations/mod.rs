//! Reservation API module
//!
//! Authorization lives in the handlers: admins see everything,
//! customers only their own rows, and the cancel transition is the one
//! lifecycle step a customer may trigger.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", put(handler::update_status))
        .route("/{id}/end-time", put(handler::extend_end_time))
        .route("/{id}/payment-proof", put(handler::attach_payment_proof))
}
