//! Cart Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{CartItem, CartItemCreate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "cart_item";

#[derive(Clone)]
pub struct CartRepository {
    base: BaseRepository,
}

impl CartRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All cart items owned by a user
    pub async fn find_for_user(&self, owner: &RecordId) -> RepoResult<Vec<CartItem>> {
        let items: Vec<CartItem> = self
            .base
            .db()
            .query("SELECT * FROM cart_item WHERE owner = $owner")
            .bind(("owner", owner.clone()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find one cart item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<CartItem>> {
        let thing = self.base.parse_id(id)?;
        let item: Option<CartItem> = self.base.db().select(thing).await?;
        Ok(item)
    }

    /// Add to cart, merging with an existing (product, size) row
    pub async fn add(&self, owner: &RecordId, data: CartItemCreate) -> RepoResult<CartItem> {
        if data.quantity <= 0 {
            return Err(RepoError::Validation(
                "Quantity must be positive".to_string(),
            ));
        }

        let existing = self
            .find_for_user(owner)
            .await?
            .into_iter()
            .find(|i| i.product == data.product && i.size == data.size);

        if let Some(found) = existing {
            let id = found
                .id
                .as_ref()
                .map(|id| id.to_string())
                .ok_or_else(|| RepoError::Database("Cart item without id".to_string()))?;
            return self.update_quantity(&id, found.quantity + data.quantity).await;
        }

        let item = CartItem {
            id: None,
            owner: owner.clone(),
            product: data.product,
            quantity: data.quantity,
            size: data.size,
        };

        let created: Option<CartItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to add cart item".to_string()))
    }

    /// Set the quantity of a cart item
    pub async fn update_quantity(&self, id: &str, quantity: i32) -> RepoResult<CartItem> {
        if quantity <= 0 {
            return Err(RepoError::Validation(
                "Quantity must be positive".to_string(),
            ));
        }

        let thing = self.base.parse_id(id)?;
        self.base
            .db()
            .query("UPDATE $thing SET quantity = $quantity")
            .bind(("thing", thing))
            .bind(("quantity", quantity))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Cart item {} not found", id)))
    }

    /// Remove one cart item
    pub async fn remove(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id)?;
        let _: Option<CartItem> = self.base.db().delete(thing).await?;
        Ok(true)
    }

    /// Clear a user's cart (reservation checkout consumed it)
    pub async fn clear_for_user(&self, owner: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("DELETE cart_item WHERE owner = $owner")
            .bind(("owner", owner.clone()))
            .await?;
        Ok(())
    }
}
