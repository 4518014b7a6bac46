//! Cart API handlers
//!
//! Carts are strictly per-customer; every operation scopes to the
//! authenticated user.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::error::{AppError, AppResult};
use validator::Validate;

use super::super::user_record;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{CartItem, CartItemCreate};

const RESOURCE: &str = "cart";

async fn owned_item(
    state: &ServerState,
    id: &str,
    user: &CurrentUser,
) -> AppResult<CartItem> {
    let item = state
        .db
        .cart()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Cart item {}", id)))?;

    if item.owner.to_string() != user.id {
        return Err(AppError::forbidden("Not your cart item"));
    }
    Ok(item)
}

/// GET /api/cart - the caller's cart
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<CartItem>>> {
    let owner = user_record(&user)?;
    Ok(Json(state.db.cart().find_for_user(&owner).await?))
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddToCartRequest {
    pub product_id: String,
    #[validate(range(min = 1, max = 99))]
    pub quantity: i32,
    pub size: Option<String>,
}

/// POST /api/cart - add a product, merging with an existing row
pub async fn add(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<CartItem>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let owner = user_record(&user)?;
    let product_id = payload.product_id;
    let product = state
        .db
        .products()
        .find_by_id(&product_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", product_id)))?;
    if !product.is_active {
        return Err(AppError::validation(format!(
            "Product '{}' is not available",
            product.name
        )));
    }
    if let Some(size) = payload.size.as_deref()
        && !product.sizes.iter().any(|v| v.name == size)
    {
        return Err(AppError::validation(format!(
            "Product '{}' has no size '{}'",
            product.name, size
        )));
    }

    let item = state
        .db
        .cart()
        .add(
            &owner,
            CartItemCreate {
                product: product
                    .id
                    .ok_or_else(|| AppError::internal("Product row without id"))?,
                quantity: payload.quantity,
                size: payload.size,
            },
        )
        .await?;

    state.bump_version(RESOURCE);
    Ok(Json(item))
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQuantityRequest {
    #[validate(range(min = 1, max = 99))]
    pub quantity: i32,
}

/// PUT /api/cart/items/:id - set a row's quantity
pub async fn update_quantity(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<CartItem>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    owned_item(&state, &id, &user).await?;
    let item = state.db.cart().update_quantity(&id, payload.quantity).await?;
    state.bump_version(RESOURCE);
    Ok(Json(item))
}

/// DELETE /api/cart/items/:id - remove one row
pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    owned_item(&state, &id, &user).await?;
    let result = state.db.cart().remove(&id).await?;
    state.bump_version(RESOURCE);
    Ok(Json(result))
}

/// DELETE /api/cart - empty the caller's cart
pub async fn clear(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<bool>> {
    let owner = user_record(&user)?;
    state.db.cart().clear_for_user(&owner).await?;
    state.bump_version(RESOURCE);
    Ok(Json(true))
}
