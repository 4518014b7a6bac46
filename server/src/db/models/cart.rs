//! Cart Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Cart item entity — one row per (owner, product, size)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub owner: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub product: RecordId,
    pub quantity: i32,
    #[serde(default)]
    pub size: Option<String>,
}

/// Add-to-cart payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub product: RecordId,
    pub quantity: i32,
    pub size: Option<String>,
}
