//! Order route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use clementine_core::{OrderId, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{LineItem, Order, OrderTrack};
use crate::state::AppState;

use super::SessionQuery;

/// Request body for placing an order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub payment_method: String,
}

/// One frozen line item as returned to the client. `id` is the product id.
#[derive(Debug, Serialize)]
pub struct LineItemView {
    pub id: ProductId,
    pub name: String,
    pub price: i64,
    pub qty: i64,
}

impl From<LineItem> for LineItemView {
    fn from(item: LineItem) -> Self {
        Self {
            id: item.product_id,
            name: item.name,
            price: item.price,
            qty: item.qty,
        }
    }
}

/// Order as returned to the client; the session token is not echoed back.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: OrderId,
    pub items: Vec<LineItemView>,
    pub total: i64,
    pub payment_method: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            items: order.items.into_iter().map(LineItemView::from).collect(),
            total: order.total,
            payment_method: order.payment_method,
            status: order.status,
            created_at: order.created_at,
        }
    }
}

/// `POST /api/orders` - convert the session's cart into an order.
pub async fn place(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<OrderView>)> {
    let order = state
        .orders()
        .place_order(&request.session_id, &request.payment_method)?;
    Ok((StatusCode::CREATED, Json(OrderView::from(order))))
}

/// `GET /api/orders` - session orders, newest first.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<Vec<OrderView>>> {
    let orders = state.orders().list_orders(&query.session_id)?;
    Ok(Json(orders.into_iter().map(OrderView::from).collect()))
}

/// `GET /api/orders/track/{order_id}` - track view; misses are a 200 with
/// a `NOT_FOUND` status in the body, never an HTTP error.
pub async fn track(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<OrderTrack>> {
    Ok(Json(
        state.orders().track_order(&query.session_id, &order_id)?,
    ))
}
