//! Latte Server - café ordering and seat reservation backend
//!
//! # Architecture
//!
//! - **availability** (`availability`): the pure engine deriving seat
//!   status, detecting interval conflicts and validating reservation
//!   requests
//! - **reservations** (`reservations`): the only write path for seat
//!   time — per-seat locking, conflict re-checks, lifecycle
//! - **database** (`db`): embedded SurrealDB storage
//! - **auth** (`auth`): JWT + Argon2
//! - **HTTP API** (`api`): RESTful interface
//!
//! # Module layout
//!
//! ```text
//! server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT, middleware, extractors
//! ├── availability/  # pure seat-status / conflict engine
//! ├── reservations/  # reservation writer and seat locks
//! ├── services/      # notification webhook
//! ├── api/           # HTTP routes and handlers
//! ├── utils/         # logging, error bridging, timeouts
//! └── db/            # models and repositories
//! ```

pub mod api;
pub mod auth;
pub mod availability;
pub mod core;
pub mod db;
pub mod reservations;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use reservations::ReservationWriter;
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    __          __  __
   / /   ____ _/ /_/ /____
  / /   / __ `/ __/ __/ _ \
 / /___/ /_/ / /_/ /_/  __/
/_____/\__,_/\__/\__/\___/
    "#
    );
}
