//! Product Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all active products
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE is_active = true ORDER BY name")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let thing = self.base.parse_id(id)?;
        let product: Option<Product> = self.base.db().select(thing).await?;
        Ok(product)
    }

    /// Find product by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Product>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM product WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let products: Vec<Product> = result.take(0)?;
        Ok(products.into_iter().next())
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Product '{}' already exists",
                data.name
            )));
        }

        let product = Product {
            id: None,
            name: data.name,
            price: data.price,
            description: data.description,
            image_url: data.image_url,
            sizes: data.sizes,
            is_active: true,
        };

        let created: Option<Product> = self.base.db().create(TABLE).content(product).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Update a product
    ///
    /// Existing reservations keep their line-item price snapshots.
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let thing = self.base.parse_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))?;

        if let Some(new_name) = data.name.as_ref()
            && *new_name != existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Product '{}' already exists",
                new_name
            )));
        }

        let product = Product {
            id: existing.id,
            name: data.name.unwrap_or(existing.name),
            price: data.price.unwrap_or(existing.price),
            description: data.description.or(existing.description),
            image_url: data.image_url.or(existing.image_url),
            sizes: data.sizes.unwrap_or(existing.sizes),
            is_active: data.is_active.unwrap_or(existing.is_active),
        };

        let updated: Option<Product> = self.base.db().update(thing).content(product).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id)?;
        let _: Option<Product> = self.base.db().delete(thing).await?;
        Ok(true)
    }
}
