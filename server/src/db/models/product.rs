//! Product Model

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Size variant with its own price (规格)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeVariant {
    pub name: String,
    pub price: Decimal,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    /// Stable URL from the external image host
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub sizes: Vec<SizeVariant>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Current unit price for an optional size variant
    ///
    /// Falls back to the base price when the size has no own price.
    pub fn unit_price(&self, size: Option<&str>) -> Decimal {
        size.and_then(|s| self.sizes.iter().find(|v| v.name == s))
            .map(|v| v.price)
            .unwrap_or(self.price)
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub sizes: Vec<SizeVariant>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<SizeVariant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
