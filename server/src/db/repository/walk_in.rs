//! Walk-In Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{WalkIn, WalkInCreate};
use chrono::Utc;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "walk_in";

#[derive(Clone)]
pub struct WalkInRepository {
    base: BaseRepository,
}

impl WalkInRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all walk-ins, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<WalkIn>> {
        let rows: Vec<WalkIn> = self
            .base
            .db()
            .query("SELECT * FROM walk_in ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Find walk-in by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<WalkIn>> {
        let thing = self.base.parse_id(id)?;
        let row: Option<WalkIn> = self.base.db().select(thing).await?;
        Ok(row)
    }

    /// All walk-ins for a seat
    pub async fn find_for_seat(&self, seat: &RecordId) -> RepoResult<Vec<WalkIn>> {
        let rows: Vec<WalkIn> = self
            .base
            .db()
            .query("SELECT * FROM walk_in WHERE seat = $seat ORDER BY start_time")
            .bind(("seat", seat.clone()))
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Persist a new walk-in
    ///
    /// Conflict checking happens in the reservation writer, under the
    /// same per-seat lock as customer reservations.
    pub async fn create(&self, data: WalkInCreate) -> RepoResult<WalkIn> {
        if data.guest_count <= 0 {
            return Err(RepoError::Validation(
                "Guest count must be positive".to_string(),
            ));
        }

        let walk_in = WalkIn {
            id: None,
            seat: data.seat,
            guest_count: data.guest_count,
            start_time: Some(data.start_time),
            end_time: Some(data.end_time),
            note: data.note,
            created_at: Utc::now(),
        };

        let created: Option<WalkIn> = self.base.db().create(TABLE).content(walk_in).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create walk-in".to_string()))
    }

    /// Delete a walk-in (guest left, seat frees up)
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id)?;
        let _: Option<WalkIn> = self.base.db().delete(thing).await?;
        Ok(true)
    }
}
