//! Product API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, AppResult};

use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate, ProductUpdate};

const RESOURCE: &str = "product";

/// GET /api/products - all active products
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.db.products().find_all().await?))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state
        .db
        .products()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", id)))?;
    Ok(Json(product))
}

/// POST /api/products - create a product (admin)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    let product = state.db.products().create(payload).await?;
    state.bump_version(RESOURCE);
    Ok(Json(product))
}

/// PUT /api/products/:id - update a product (admin)
///
/// Existing reservations keep their snapshotted line-item prices.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let product = state.db.products().update(&id, payload).await?;
    state.bump_version(RESOURCE);
    Ok(Json(product))
}

/// DELETE /api/products/:id - delete a product (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state
        .db
        .products()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", id)))?;

    let result = state.db.products().delete(&id).await?;
    state.bump_version(RESOURCE);
    Ok(Json(result))
}
