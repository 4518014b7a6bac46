//! Database Module
//!
//! Embedded SurrealDB service plus models and repositories.

pub mod models;
pub mod repository;

use crate::core::config::Config;
use shared::error::AppError;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};
use tracing::info;

const NAMESPACE: &str = "latte";
const DATABASE: &str = "latte";

/// Database service holding the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    db: Surreal<Db>,
}

impl DbService {
    /// Open the RocksDB-backed database under the configured work dir
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_path = Path::new(&config.work_dir).join("database").join("latte.db");
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::database(format!("Failed to create db dir: {}", e)))?;
        }

        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path.as_path())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        info!("Database ready at {}", db_path.display());
        Ok(Self { db })
    }

    /// In-memory database for tests
    pub async fn memory() -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open memory db: {}", e)))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        Ok(Self { db })
    }

    pub fn db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn seats(&self) -> repository::SeatRepository {
        repository::SeatRepository::new(self.db())
    }

    pub fn reservations(&self) -> repository::ReservationRepository {
        repository::ReservationRepository::new(self.db())
    }

    pub fn walk_ins(&self) -> repository::WalkInRepository {
        repository::WalkInRepository::new(self.db())
    }

    pub fn products(&self) -> repository::ProductRepository {
        repository::ProductRepository::new(self.db())
    }

    pub fn cart(&self) -> repository::CartRepository {
        repository::CartRepository::new(self.db())
    }

    pub fn users(&self) -> repository::UserRepository {
        repository::UserRepository::new(self.db())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rocksdb_opens_under_the_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(dir.path().to_string_lossy().into_owned(), 0);

        let db = DbService::initialize(&config).await.expect("open database");
        db.users()
            .ensure_admin("admin", "admin-password")
            .await
            .expect("seed admin");

        assert!(dir.path().join("database").join("latte.db").exists());
        let seeded = db.users().find_by_username("admin").await.unwrap();
        assert!(seeded.is_some());
    }
}
