//! Cart API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list).post(handler::add).delete(handler::clear),
        )
        .route(
            "/items/{id}",
            put(handler::update_quantity).delete(handler::remove),
        )
}
