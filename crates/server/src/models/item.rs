//! Session-scoped cart and wishlist items.
//!
//! Both item kinds carry a denormalized copy of the product attributes
//! taken at the moment the item was first added. Later price or catalog
//! changes never retroactively change a cart or wishlist.

use clementine_core::{ProductId, SessionId};

use super::product::{Category, Product};

/// One product held in one session's cart.
///
/// Keyed by (session, product); repeat adds accumulate `qty` on the
/// existing entry instead of creating a duplicate.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub session_id: SessionId,
    pub product_id: ProductId,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub price: i64,
    pub rating: f64,
    pub qty: i64,
}

impl CartItem {
    /// Create a fresh entry with zero quantity; the caller applies the
    /// requested quantity through the store's upsert.
    #[must_use]
    pub fn from_product(session_id: &SessionId, product: &Product) -> Self {
        Self {
            session_id: session_id.clone(),
            product_id: product.id,
            name: product.name.clone(),
            category: product.category,
            description: product.description.clone(),
            price: product.price,
            rating: product.rating,
            qty: 0,
        }
    }
}

/// One product held in one session's wishlist. Same shape as a cart item
/// without a quantity; re-adding is an idempotent upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistItem {
    pub session_id: SessionId,
    pub product_id: ProductId,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub price: i64,
    pub rating: f64,
}

impl WishlistItem {
    #[must_use]
    pub fn from_product(session_id: &SessionId, product: &Product) -> Self {
        Self {
            session_id: session_id.clone(),
            product_id: product.id,
            name: product.name.clone(),
            category: product.category,
            description: product.description.clone(),
            price: product.price,
            rating: product.rating,
        }
    }
}
