//! Statistics API module (admin only)

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::middleware::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/statistics", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/overview", get(handler::overview))
        .route("/peak-hours", get(handler::peak_hours))
        .layer(middleware::from_fn(require_admin))
}
