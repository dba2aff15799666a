//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use clementine_core::ProductId;
use serde::Deserialize;

use crate::error::Result;
use crate::models::Product;
use crate::state::AppState;

/// Free-text search and category filter, both optional.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: String,
}

/// `GET /api/catalog` - filtered product list in ascending id order.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Product>> {
    Json(state.catalog().list(&query.search, &query.category))
}

/// `GET /api/catalog/{id}` - single product, 404 when unknown.
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Product>> {
    Ok(Json(state.catalog().get_by_id(ProductId::new(id))?))
}
