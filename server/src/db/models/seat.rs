//! Seat Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Seat entity (座位)
///
/// The stored record never carries a status — display status is derived
/// by the availability engine from the seat's reservations and walk-ins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default = "default_capacity")]
    pub capacity: i32,
    #[serde(default)]
    pub description: Option<String>,
    /// Stable URL from the external image host
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

fn default_capacity() -> i32 {
    2
}

/// Create seat payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatCreate {
    pub name: String,
    pub capacity: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Update seat payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
