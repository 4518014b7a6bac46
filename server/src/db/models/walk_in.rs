//! Walk-In Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::types::ReservationStatus;
use surrealdb::RecordId;

use crate::availability::ReservationInterval;

/// Walk-in entity (未预约到店)
///
/// One row per seat. Walk-ins have no lifecycle status — while their
/// window covers the query instant the seat shows as occupied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkIn {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub seat: RecordId,
    pub guest_count: i32,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WalkIn {
    /// Project this walk-in onto the time axis for the engine
    ///
    /// Mapped to `Confirmed` so it participates in conflict checks the
    /// same way an active reservation does.
    pub fn interval(&self) -> ReservationInterval {
        ReservationInterval {
            id: self.id.as_ref().map(|id| id.to_string()),
            start: self.start_time,
            end: self.end_time,
            status: ReservationStatus::Confirmed,
        }
    }
}

/// Create walk-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkInCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub seat: RecordId,
    pub guest_count: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub note: Option<String>,
}
