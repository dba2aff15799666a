//! Wishlist workflow: the cart's shape without quantities.

use std::sync::Arc;

use clementine_core::{ProductId, SessionId};

use crate::error::AppError;
use crate::models::WishlistItem;
use crate::store::SessionItemStore;

use super::catalog::CatalogService;

/// Session-scoped wishlist. `add` is an idempotent upsert: re-adding a
/// product leaves a single entry and no counter.
#[derive(Debug, Clone)]
pub struct WishlistService {
    items: Arc<SessionItemStore<WishlistItem>>,
    catalog: CatalogService,
}

impl WishlistService {
    #[must_use]
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            items: Arc::new(SessionItemStore::new()),
            catalog,
        }
    }

    /// Wishlist contents for a session, ascending by product id.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the session id is blank.
    pub fn list(&self, session_id: &str) -> Result<Vec<WishlistItem>, AppError> {
        let session = SessionId::parse(session_id)?;
        Ok(self.items.list_session(&session))
    }

    /// Idempotently add a product to the session's wishlist.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank session id; `NotFound` for an
    /// unknown product.
    pub fn add(&self, session_id: &str, product_id: ProductId) -> Result<WishlistItem, AppError> {
        let session = SessionId::parse(session_id)?;
        let product = self.catalog.get_by_id(product_id)?;
        Ok(self.items.upsert(
            &session,
            product_id,
            || WishlistItem::from_product(&session, &product),
            |_| {},
        ))
    }

    /// Remove the keyed entry; a no-op when absent.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the session id is blank.
    pub fn remove(&self, session_id: &str, product_id: ProductId) -> Result<(), AppError> {
        let session = SessionId::parse(session_id)?;
        self.items.remove(&session, product_id);
        Ok(())
    }
}
