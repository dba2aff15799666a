//! Cart route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use clementine_core::ProductId;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{CartItem, Category};
use crate::state::AppState;

use super::SessionQuery;

/// Request body for adding a cart item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    #[serde(default)]
    pub session_id: String,
    pub product_id: i32,
    pub qty: i64,
}

/// Cart item as returned to the client. The session token is implied by
/// the request and not echoed back.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub price: i64,
    pub rating: f64,
    pub qty: i64,
}

impl From<CartItem> for CartItemView {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            category: item.category,
            description: item.description,
            price: item.price,
            rating: item.rating,
            qty: item.qty,
        }
    }
}

/// `GET /api/cart` - session cart items, ascending by product id.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<Vec<CartItemView>>> {
    let items = state.cart().list(&query.session_id)?;
    Ok(Json(items.into_iter().map(CartItemView::from).collect()))
}

/// `POST /api/cart/items` - add a product; repeat adds accumulate qty.
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddCartItemRequest>,
) -> Result<(StatusCode, Json<CartItemView>)> {
    let item = state.cart().add(
        &request.session_id,
        ProductId::new(request.product_id),
        request.qty,
    )?;
    Ok((StatusCode::CREATED, Json(CartItemView::from(item))))
}

/// `DELETE /api/cart/items/{product_id}` - remove, no-op when absent.
pub async fn remove(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Query(query): Query<SessionQuery>,
) -> Result<StatusCode> {
    state
        .cart()
        .remove(&query.session_id, ProductId::new(product_id))?;
    Ok(StatusCode::NO_CONTENT)
}
