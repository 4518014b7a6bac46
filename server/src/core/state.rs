use std::sync::Arc;

use dashmap::DashMap;
use shared::error::AppError;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::reservations::SeatLocks;
use crate::services::Notifier;

/// Resource version counters
///
/// Lock-free per-resource version numbers backed by DashMap. Clients
/// poll these to decide whether a cached list is stale.
#[derive(Debug, Default)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// Increment a resource's version and return the new value
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Current version of a resource, 0 when never bumped
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

/// Shared server state
///
/// Cheap to clone, every field is either Copy-ish config or an Arc.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database service
    pub db: DbService,
    /// JWT signing/validation
    pub jwt_service: Arc<JwtService>,
    /// Per-seat async locks closing the booking race window
    pub seat_locks: Arc<SeatLocks>,
    /// Resource version counters for sync polling
    pub resource_versions: Arc<ResourceVersions>,
    /// Fire-and-forget reservation notifications
    pub notifier: Notifier,
}

impl ServerState {
    /// Initialize the production state: open RocksDB under the work
    /// dir and seed the admin account.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::initialize(config).await?;
        let state = Self::with_db(config.clone(), db);

        state
            .db
            .users()
            .ensure_admin(&state.config.admin_username, &state.config.admin_password)
            .await?;

        Ok(state)
    }

    /// Assemble state around an already-open database (tests use the
    /// in-memory engine here)
    pub fn with_db(config: Config, db: DbService) -> Self {
        let notifier = Notifier::new(config.notify_webhook_url.clone());
        Self {
            jwt_service: Arc::new(JwtService::new(config.jwt.clone())),
            seat_locks: Arc::new(SeatLocks::new()),
            resource_versions: Arc::new(ResourceVersions::new()),
            notifier,
            config,
            db,
        }
    }

    /// Bump a resource version after a mutation
    pub fn bump_version(&self, resource: &str) -> u64 {
        self.resource_versions.increment(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_starts_at_zero_and_increments() {
        let versions = ResourceVersions::new();
        assert_eq!(versions.get("seat"), 0);
        assert_eq!(versions.increment("seat"), 1);
        assert_eq!(versions.increment("seat"), 2);
        assert_eq!(versions.get("seat"), 2);
        assert_eq!(versions.get("product"), 0);
    }
}
