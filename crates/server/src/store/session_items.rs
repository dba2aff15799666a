//! Per-session item store keyed by (session, product).
//!
//! The same store backs the cart and the wishlist; only the item type and
//! the upsert closure differ. The composite key plus `DashMap`'s entry API
//! gives atomic get-or-insert semantics per key, so concurrent quantity
//! increments on the same (session, product) pair never lose updates.

use clementine_core::{ProductId, SessionId};
use dashmap::DashMap;

/// Map of (session, product) to one item value. At most one entry exists
/// per key; repeat adds go through [`SessionItemStore::upsert`] instead of
/// inserting duplicates.
#[derive(Debug)]
pub struct SessionItemStore<T> {
    items: DashMap<(SessionId, ProductId), T>,
}

impl<T: Clone> SessionItemStore<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Atomically find-or-create the entry for (session, product) and
    /// apply `modify` to it. The entry lock is held for the whole
    /// read-modify-write, so concurrent upserts on the same key serialize.
    ///
    /// Returns a copy of the resulting item.
    pub fn upsert<C, M>(
        &self,
        session_id: &SessionId,
        product_id: ProductId,
        create: C,
        modify: M,
    ) -> T
    where
        C: FnOnce() -> T,
        M: FnOnce(&mut T),
    {
        let mut entry = self
            .items
            .entry((session_id.clone(), product_id))
            .or_insert_with(create);
        modify(entry.value_mut());
        entry.value().clone()
    }

    /// All items for a session, ascending by product id.
    #[must_use]
    pub fn list_session(&self, session_id: &SessionId) -> Vec<T> {
        let mut entries: Vec<(ProductId, T)> = self
            .items
            .iter()
            .filter(|entry| entry.key().0 == *session_id)
            .map(|entry| (entry.key().1, entry.value().clone()))
            .collect();
        entries.sort_by_key(|(product_id, _)| *product_id);
        entries.into_iter().map(|(_, item)| item).collect()
    }

    /// Delete the keyed entry. Removing a non-existent entry is a no-op.
    pub fn remove(&self, session_id: &SessionId, product_id: ProductId) {
        self.items.remove(&(session_id.clone(), product_id));
    }

    /// Bulk-delete every entry for the session.
    pub fn clear_session(&self, session_id: &SessionId) {
        self.items.retain(|(session, _), _| session != session_id);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> Default for SessionItemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
