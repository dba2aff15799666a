//! Immutable order store keyed by generated order id.

use clementine_core::{OrderId, SessionId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rand::Rng;

use crate::models::Order;

/// Number of random digits after the `ORD` prefix.
const ORDER_ID_DIGITS: usize = 10;

/// Holds completed orders. Orders are inserted exactly once and never
/// mutated afterwards.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: DashMap<OrderId, Order>,
}

impl OrderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the order if its id is unused. Returns `false` on an id
    /// collision so the caller can re-draw and retry.
    pub fn try_insert(&self, order: Order) -> bool {
        match self.orders.entry(order.id.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(order);
                true
            }
        }
    }

    /// Lookup by (id, session). An order owned by a different session is
    /// reported as absent, never leaked across sessions.
    #[must_use]
    pub fn find(&self, order_id: &OrderId, session_id: &SessionId) -> Option<Order> {
        self.orders
            .get(order_id)
            .filter(|order| order.session_id == *session_id)
            .map(|order| order.value().clone())
    }

    /// All orders for a session, newest first.
    #[must_use]
    pub fn for_session(&self, session_id: &SessionId) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|entry| entry.value().session_id == *session_id)
            .map(|entry| entry.value().clone())
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Draw a fresh `ORD`-prefixed id from random digits. The store's
/// [`OrderStore::try_insert`] rejects collisions, so uniqueness holds even
/// in the unlikely event two draws coincide.
#[must_use]
pub fn generate_order_id() -> OrderId {
    let mut rng = rand::rng();
    let digits: String = (0..ORDER_ID_DIGITS)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();
    OrderId::new(format!("ORD{digits}"))
}
