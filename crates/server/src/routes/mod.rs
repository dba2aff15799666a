//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                              - Liveness check
//!
//! # Catalog
//! GET  /api/catalog?search=&category=       - Filtered product list
//! GET  /api/catalog/{id}                    - Single product
//!
//! # Cart
//! GET    /api/cart?sessionId=               - Session cart items
//! POST   /api/cart/items                    - Add item (cumulative qty)
//! DELETE /api/cart/items/{productId}?sessionId= - Remove item
//!
//! # Wishlist
//! GET    /api/wishlist?sessionId=           - Session wishlist items
//! POST   /api/wishlist/items                - Add item (idempotent)
//! DELETE /api/wishlist/items/{productId}?sessionId= - Remove item
//!
//! # Orders
//! POST /api/orders                          - Place order from cart
//! GET  /api/orders?sessionId=               - Session orders, newest first
//! GET  /api/orders/track/{orderId}?sessionId= - Track view (soft miss)
//!
//! # Chat
//! POST /api/chat                            - Domain-restricted assistant
//! ```

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod orders;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Query carrying the caller-supplied session token.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionQuery {
    #[serde(default)]
    pub session_id: String,
}

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/{id}", get(catalog::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::index))
        .route("/items", post(cart::add))
        .route("/items/{product_id}", axum::routing::delete(cart::remove))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::index))
        .route("/items", post(wishlist::add))
        .route(
            "/items/{product_id}",
            axum::routing::delete(wishlist::remove),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index).post(orders::place))
        .route("/track/{order_id}", get(orders::track))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/catalog", catalog_routes())
        .nest("/api/cart", cart_routes())
        .nest("/api/wishlist", wishlist_routes())
        .nest("/api/orders", order_routes())
        .route("/api/chat", post(chat::chat))
}

/// Build the full application router for the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
