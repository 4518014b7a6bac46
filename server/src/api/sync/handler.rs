//! Sync API handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;

#[derive(Debug, Serialize)]
pub struct Versions {
    pub seat: u64,
    pub product: u64,
    pub reservation: u64,
    pub walk_in: u64,
    pub cart: u64,
}

/// GET /api/sync/versions - current version counter per resource
///
/// Clients compare against their cached copy and refetch only what
/// moved.
pub async fn versions(State(state): State<ServerState>) -> Json<Versions> {
    let versions = &state.resource_versions;
    Json(Versions {
        seat: versions.get("seat"),
        product: versions.get("product"),
        reservation: versions.get("reservation"),
        walk_in: versions.get("walk_in"),
        cart: versions.get("cart"),
    })
}
