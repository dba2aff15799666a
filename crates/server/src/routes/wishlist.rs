//! Wishlist route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use clementine_core::ProductId;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Category, WishlistItem};
use crate::state::AppState;

use super::SessionQuery;

/// Request body for adding a wishlist item. No quantity exists here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWishlistItemRequest {
    #[serde(default)]
    pub session_id: String,
    pub product_id: i32,
}

/// Wishlist item as returned to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItemView {
    pub product_id: ProductId,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub price: i64,
    pub rating: f64,
}

impl From<WishlistItem> for WishlistItemView {
    fn from(item: WishlistItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            category: item.category,
            description: item.description,
            price: item.price,
            rating: item.rating,
        }
    }
}

/// `GET /api/wishlist` - session wishlist, ascending by product id.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<Vec<WishlistItemView>>> {
    let items = state.wishlist().list(&query.session_id)?;
    Ok(Json(items.into_iter().map(WishlistItemView::from).collect()))
}

/// `POST /api/wishlist/items` - idempotent add.
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddWishlistItemRequest>,
) -> Result<(StatusCode, Json<WishlistItemView>)> {
    let item = state
        .wishlist()
        .add(&request.session_id, ProductId::new(request.product_id))?;
    Ok((StatusCode::CREATED, Json(WishlistItemView::from(item))))
}

/// `DELETE /api/wishlist/items/{product_id}` - remove, no-op when absent.
pub async fn remove(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Query(query): Query<SessionQuery>,
) -> Result<StatusCode> {
    state
        .wishlist()
        .remove(&query.session_id, ProductId::new(product_id))?;
    Ok(StatusCode::NO_CONTENT)
}
