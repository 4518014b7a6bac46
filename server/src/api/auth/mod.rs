//! Auth API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/register", post(handler::register))
        .route("/me", get(handler::me))
}
