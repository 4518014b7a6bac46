//! Reservation Repository
//!
//! Fetches rows only — overlap decisions belong to the availability
//! engine, which keeps one authoritative implementation.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Reservation;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::types::ReservationStatus;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "reservation";

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all reservations, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let rows: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservation ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Find reservation by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let thing = self.base.parse_id(id)?;
        let row: Option<Reservation> = self.base.db().select(thing).await?;
        Ok(row)
    }

    /// Find reservations owned by a customer, newest first
    pub async fn find_for_customer(&self, customer: &RecordId) -> RepoResult<Vec<Reservation>> {
        let rows: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservation WHERE customer = $customer ORDER BY created_at DESC")
            .bind(("customer", customer.clone()))
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Full reservation history for a seat (embedded in the seat list)
    pub async fn find_for_seat(&self, seat: &RecordId) -> RepoResult<Vec<Reservation>> {
        let rows: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservation WHERE seats CONTAINS $seat ORDER BY start_time")
            .bind(("seat", seat.clone()))
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Non-canceled reservations for a seat — conflict check input
    pub async fn find_blocking_for_seat(&self, seat: &RecordId) -> RepoResult<Vec<Reservation>> {
        let rows: Vec<Reservation> = self
            .base
            .db()
            .query(
                "SELECT * FROM reservation WHERE seats CONTAINS $seat AND status != 'CANCELED'",
            )
            .bind(("seat", seat.clone()))
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Whether any reservation (any status) references the seat
    pub async fn any_for_seat(&self, seat: &RecordId) -> RepoResult<bool> {
        #[derive(serde::Deserialize)]
        struct Count {
            total: i64,
        }
        let mut result = self
            .base
            .db()
            .query("SELECT count() AS total FROM reservation WHERE seats CONTAINS $seat GROUP ALL")
            .bind(("seat", seat.clone()))
            .await?;
        let count: Option<Count> = result.take(0)?;
        Ok(count.map(|c| c.total > 0).unwrap_or(false))
    }

    /// Non-canceled reservations — statistics input, filtered in Rust
    pub async fn find_not_canceled(&self) -> RepoResult<Vec<Reservation>> {
        let rows: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservation WHERE status != 'CANCELED'")
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Persist a new reservation
    pub async fn create(&self, reservation: Reservation) -> RepoResult<Reservation> {
        let created: Option<Reservation> =
            self.base.db().create(TABLE).content(reservation).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    /// Update the end time of a reservation along with its recomputed
    /// seat fee and total
    pub async fn update_end_time(
        &self,
        id: &str,
        end_time: DateTime<Utc>,
        seat_fee: Decimal,
        total: Decimal,
    ) -> RepoResult<Reservation> {
        let thing = self.base.parse_id(id)?;
        self.base
            .db()
            .query("UPDATE $thing SET end_time = $end_time, seat_fee = $seat_fee, total = $total")
            .bind(("thing", thing))
            .bind(("end_time", end_time))
            .bind(("seat_fee", seat_fee))
            .bind(("total", total))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Attach a payment proof reference
    pub async fn set_payment_proof(&self, id: &str, proof: &str) -> RepoResult<Reservation> {
        let thing = self.base.parse_id(id)?;
        self.base
            .db()
            .query("UPDATE $thing SET payment_proof = $proof")
            .bind(("thing", thing))
            .bind(("proof", proof.to_string()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Update the lifecycle status of a reservation
    ///
    /// Transition legality is checked by the caller against
    /// [`ReservationStatus::can_transition_to`].
    pub async fn update_status(
        &self,
        id: &str,
        status: ReservationStatus,
    ) -> RepoResult<Reservation> {
        let thing = self.base.parse_id(id)?;
        self.base
            .db()
            .query("UPDATE $thing SET status = $status")
            .bind(("thing", thing))
            .bind(("status", status))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }
}
