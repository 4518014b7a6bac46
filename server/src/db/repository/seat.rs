//! Seat Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Seat, SeatCreate, SeatUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "seat";

#[derive(Clone)]
pub struct SeatRepository {
    base: BaseRepository,
}

impl SeatRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all active seats
    pub async fn find_all(&self) -> RepoResult<Vec<Seat>> {
        let seats: Vec<Seat> = self
            .base
            .db()
            .query("SELECT * FROM seat WHERE is_active = true ORDER BY name")
            .await?
            .take(0)?;
        Ok(seats)
    }

    /// Find seat by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Seat>> {
        let thing = self.base.parse_id(id)?;
        let seat: Option<Seat> = self.base.db().select(thing).await?;
        Ok(seat)
    }

    /// Find seat by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Seat>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM seat WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let seats: Vec<Seat> = result.take(0)?;
        Ok(seats.into_iter().next())
    }

    /// Create a new seat
    pub async fn create(&self, data: SeatCreate) -> RepoResult<Seat> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Seat '{}' already exists",
                data.name
            )));
        }

        let capacity = data.capacity.unwrap_or(2);
        if capacity <= 0 {
            return Err(RepoError::Validation(
                "Seat capacity must be positive".to_string(),
            ));
        }

        let seat = Seat {
            id: None,
            name: data.name,
            capacity,
            description: data.description,
            image_url: data.image_url,
            is_active: true,
        };

        let created: Option<Seat> = self.base.db().create(TABLE).content(seat).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create seat".to_string()))
    }

    /// Update a seat
    pub async fn update(&self, id: &str, data: SeatUpdate) -> RepoResult<Seat> {
        let thing = self.base.parse_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Seat {} not found", id)))?;

        if let Some(new_name) = data.name.as_ref()
            && *new_name != existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Seat '{}' already exists",
                new_name
            )));
        }

        let capacity = data.capacity.unwrap_or(existing.capacity);
        if capacity <= 0 {
            return Err(RepoError::Validation(
                "Seat capacity must be positive".to_string(),
            ));
        }

        let seat = Seat {
            id: existing.id,
            name: data.name.unwrap_or(existing.name),
            capacity,
            description: data.description.or(existing.description),
            image_url: data.image_url.or(existing.image_url),
            is_active: data.is_active.unwrap_or(existing.is_active),
        };

        let updated: Option<Seat> = self.base.db().update(thing).content(seat).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Seat {} not found", id)))
    }

    /// Hard delete a seat
    ///
    /// Reference guard lives in the handler — a seat referenced by any
    /// reservation must not reach this call.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id)?;
        let _: Option<Seat> = self.base.db().delete(thing).await?;
        Ok(true)
    }
}
