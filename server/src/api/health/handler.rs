//! Health API handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// "ok" | "degraded"
    status: &'static str,
    version: &'static str,
    database: &'static str,
}

/// GET /health - liveness probe with a database ping, no auth
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let database = match state.db.db().health().await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!("Health check: database ping failed: {}", e);
            "error"
        }
    };

    Json(HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
