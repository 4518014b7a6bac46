//! Server Implementation
//!
//! HTTP server startup and shutdown.

use crate::api;
use crate::auth::middleware::require_auth;
use crate::core::{Config, ServerState};
use axum::middleware;
use shared::error::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let app = api::router(state.clone())
            .layer(middleware::from_fn_with_state(state.clone(), require_auth))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

        tracing::info!("☕ Latte server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await
            .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

        Ok(())
    }
}
