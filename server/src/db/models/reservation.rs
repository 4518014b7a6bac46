//! Reservation Model
//!
//! One reservation row covers every seat the customer selected; walk-ins
//! (the admin path) live in their own table, one row per seat.

use super::serde_helpers;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::types::ReservationStatus;
use surrealdb::RecordId;

use crate::availability::ReservationInterval;

/// Line item copied from the cart at reservation time
///
/// Unit price is a snapshot — later product edits never change an
/// existing reservation's total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(with = "serde_helpers::record_id")]
    pub product: RecordId,
    pub name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    #[serde(default)]
    pub size: Option<String>,
    pub line_total: Decimal,
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::vec_record_id")]
    pub seats: Vec<RecordId>,
    /// Owning customer; optional so admin-created records stay valid
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub customer: Option<RecordId>,
    pub guest_count: i32,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: ReservationStatus,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub seat_fee: Decimal,
    pub total: Decimal,
    /// Reference to the uploaded payment proof (external store)
    #[serde(default)]
    pub payment_proof: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Project this reservation onto the time axis for the engine
    pub fn interval(&self) -> ReservationInterval {
        ReservationInterval {
            id: self.id.as_ref().map(|id| id.to_string()),
            start: self.start_time,
            end: self.end_time,
            status: self.status,
        }
    }
}
