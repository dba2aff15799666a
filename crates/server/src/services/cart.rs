//! Cart workflow over the session item store.

use std::sync::Arc;

use clementine_core::{ProductId, SessionId};

use crate::error::AppError;
use crate::models::CartItem;
use crate::store::SessionItemStore;

use super::catalog::CatalogService;

/// Session-scoped cart mutations and reads.
///
/// Product attributes are denormalized into the item at first add, so
/// later catalog changes never alter an existing cart.
#[derive(Debug, Clone)]
pub struct CartService {
    items: Arc<SessionItemStore<CartItem>>,
    catalog: CatalogService,
}

impl CartService {
    #[must_use]
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            items: Arc::new(SessionItemStore::new()),
            catalog,
        }
    }

    /// Cart contents for a session, ascending by product id.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the session id is blank.
    pub fn list(&self, session_id: &str) -> Result<Vec<CartItem>, AppError> {
        let session = SessionId::parse(session_id)?;
        Ok(self.items.list_session(&session))
    }

    /// Add `qty` of a product to the session's cart. Quantity accumulates:
    /// adding twice with qty 1 yields a single entry with qty 2.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank session id or `qty < 1`; `NotFound`
    /// for an unknown product.
    pub fn add(&self, session_id: &str, product_id: ProductId, qty: i64) -> Result<CartItem, AppError> {
        let session = SessionId::parse(session_id)?;
        if qty < 1 {
            return Err(AppError::InvalidArgument(
                "qty must be at least 1".to_string(),
            ));
        }

        let product = self.catalog.get_by_id(product_id)?;
        Ok(self.items.upsert(
            &session,
            product_id,
            || CartItem::from_product(&session, &product),
            |item| item.qty += qty,
        ))
    }

    /// Remove the keyed entry. Removing a product that is not in the cart
    /// is not an error.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the session id is blank.
    pub fn remove(&self, session_id: &str, product_id: ProductId) -> Result<(), AppError> {
        let session = SessionId::parse(session_id)?;
        self.items.remove(&session, product_id);
        Ok(())
    }

    /// Current ordered cart contents, used as the checkout input.
    #[must_use]
    pub fn snapshot(&self, session: &SessionId) -> Vec<CartItem> {
        self.items.list_session(session)
    }

    /// Bulk-delete every cart entry for the session.
    pub fn clear(&self, session: &SessionId) {
        self.items.clear_session(session);
    }
}
