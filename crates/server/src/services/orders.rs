//! Order workflow: cart snapshot to immutable order.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use clementine_core::{OrderId, SessionId};
use dashmap::DashMap;

use crate::error::AppError;
use crate::models::{LineItem, Order, OrderTrack, STATUS_CONFIRMED};
use crate::store::{OrderStore, orders::generate_order_id};

use super::cart::CartService;

/// Checkout, order history, and tracking.
///
/// `place_order` runs read-compute-persist-clear as one logical
/// transaction per session: a per-session mutex serializes concurrent
/// checkouts so items added mid-transaction are never double-billed, and
/// the cart is only cleared after the order is persisted.
#[derive(Clone)]
pub struct OrderService {
    inner: Arc<OrderServiceInner>,
}

struct OrderServiceInner {
    store: OrderStore,
    cart: CartService,
    checkout_locks: DashMap<SessionId, Arc<Mutex<()>>>,
}

impl OrderService {
    #[must_use]
    pub fn new(cart: CartService) -> Self {
        Self {
            inner: Arc::new(OrderServiceInner {
                store: OrderStore::new(),
                cart,
                checkout_locks: DashMap::new(),
            }),
        }
    }

    /// Convert the session's cart into an immutable order.
    ///
    /// Freezes the cart snapshot into line items, computes the total,
    /// persists the order with status "Order Confirmed", and clears the
    /// cart. Persistence happens before clearing; on any failure before
    /// that point the cart is untouched.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank session id, blank payment method, or
    /// an empty cart.
    pub fn place_order(&self, session_id: &str, payment_method: &str) -> Result<Order, AppError> {
        let session = SessionId::parse(session_id)?;
        let payment_method = payment_method.trim();
        if payment_method.is_empty() {
            return Err(AppError::InvalidArgument(
                "paymentMethod is required".to_string(),
            ));
        }

        let lock = self
            .inner
            .checkout_locks
            .entry(session.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let snapshot = self.inner.cart.snapshot(&session);
        if snapshot.is_empty() {
            return Err(AppError::InvalidArgument("Cart is empty.".to_string()));
        }

        let items: Vec<LineItem> = snapshot
            .iter()
            .map(|item| LineItem {
                product_id: item.product_id,
                name: item.name.clone(),
                price: item.price,
                qty: item.qty,
            })
            .collect();
        let total: i64 = snapshot.iter().map(|item| item.price * item.qty).sum();

        let mut order = Order {
            id: generate_order_id(),
            session_id: session.clone(),
            items,
            total,
            payment_method: payment_method.to_string(),
            status: STATUS_CONFIRMED.to_string(),
            created_at: Utc::now(),
        };
        // Re-draw on the (unlikely) id collision
        while !self.inner.store.try_insert(order.clone()) {
            order.id = generate_order_id();
        }

        self.inner.cart.clear(&session);
        Ok(order)
    }

    /// Orders for a session, newest first.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the session id is blank.
    pub fn list_orders(&self, session_id: &str) -> Result<Vec<Order>, AppError> {
        let session = SessionId::parse(session_id)?;
        Ok(self.inner.store.for_session(&session))
    }

    /// Track an order by id under the given session.
    ///
    /// The id is trimmed and uppercased before lookup. A miss - unknown
    /// id, or an order owned by another session - is a successful
    /// [`OrderTrack`] with status `NOT_FOUND`, never an error.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the session id or order id is blank.
    pub fn track_order(&self, session_id: &str, order_id: &str) -> Result<OrderTrack, AppError> {
        let session = SessionId::parse(session_id)?;
        if order_id.trim().is_empty() {
            return Err(AppError::InvalidArgument("orderId is required".to_string()));
        }
        let order_id = OrderId::normalized(order_id);

        Ok(self.inner.store.find(&order_id, &session).map_or_else(
            || OrderTrack::not_found(order_id.clone()),
            |order| OrderTrack::found(&order),
        ))
    }
}

#[cfg(test)]
mod tests {
    use clementine_core::ProductId;

    use crate::models::STATUS_NOT_FOUND;
    use crate::services::catalog::CatalogService;
    use crate::store::CatalogStore;

    use super::*;

    fn services() -> (CartService, OrderService) {
        let catalog = CatalogService::new(Arc::new(CatalogStore::seed(10)));
        let cart = CartService::new(catalog);
        let orders = OrderService::new(cart.clone());
        (cart, orders)
    }

    #[test]
    fn test_place_order_totals_and_clears_cart() {
        let (cart, orders) = services();
        let p1 = cart.add("S1", ProductId::new(1), 2).expect("add");
        let p2 = cart.add("S1", ProductId::new(2), 1).expect("add");

        let order = orders.place_order("S1", "UPI").expect("place");

        assert_eq!(order.total, p1.price * 2 + p2.price);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.status, STATUS_CONFIRMED);
        assert_eq!(order.payment_method, "UPI");
        assert!(order.id.as_str().starts_with("ORD"));
        assert!(cart.list("S1").expect("list").is_empty());
    }

    #[test]
    fn test_place_order_freezes_line_items() {
        let (cart, orders) = services();
        cart.add("S1", ProductId::new(1), 3).expect("add");
        let order = orders.place_order("S1", "Card").expect("place");

        let line = &order.items[0];
        assert_eq!(line.product_id, ProductId::new(1));
        assert_eq!(line.qty, 3);
        assert_eq!(order.total, line.price * 3);
    }

    #[test]
    fn test_place_order_empty_cart_fails_without_order() {
        let (_cart, orders) = services();
        let err = orders.place_order("S1", "UPI").expect_err("empty cart");
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert!(orders.list_orders("S1").expect("list").is_empty());
    }

    #[test]
    fn test_place_order_requires_payment_method() {
        let (cart, orders) = services();
        cart.add("S1", ProductId::new(1), 1).expect("add");
        let err = orders.place_order("S1", "  ").expect_err("blank payment");
        assert!(matches!(err, AppError::InvalidArgument(_)));
        // Failed validation must not touch the cart
        assert_eq!(cart.list("S1").expect("list").len(), 1);
    }

    #[test]
    fn test_list_orders_newest_first() {
        let (cart, orders) = services();
        cart.add("S1", ProductId::new(1), 1).expect("add");
        let first = orders.place_order("S1", "UPI").expect("place");
        cart.add("S1", ProductId::new(2), 1).expect("add");
        let second = orders.place_order("S1", "UPI").expect("place");

        let listed = orders.list_orders("S1").expect("list");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[test]
    fn test_track_order_owning_session() {
        let (cart, orders) = services();
        cart.add("S1", ProductId::new(1), 1).expect("add");
        let order = orders.place_order("S1", "UPI").expect("place");

        let lowercase_id = order.id.as_str().to_lowercase();
        let track = orders.track_order(" S1 ", &lowercase_id).expect("track");
        assert_eq!(track.status, STATUS_CONFIRMED);
        assert_eq!(track.order_id, order.id);
    }

    #[test]
    fn test_track_order_cross_session_soft_miss() {
        let (cart, orders) = services();
        cart.add("S1", ProductId::new(1), 1).expect("add");
        let order = orders.place_order("S1", "UPI").expect("place");

        let track = orders.track_order("S2", order.id.as_str()).expect("track");
        assert_eq!(track.status, STATUS_NOT_FOUND);
    }

    #[test]
    fn test_track_order_unknown_id_soft_miss() {
        let (_cart, orders) = services();
        let track = orders.track_order("S1", "ord0000000001").expect("track");
        assert_eq!(track.status, STATUS_NOT_FOUND);
        assert_eq!(track.order_id.as_str(), "ORD0000000001");
    }

    #[test]
    fn test_track_order_blank_id_is_invalid() {
        let (_cart, orders) = services();
        let err = orders.track_order("S1", "  ").expect_err("blank id");
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn test_concurrent_checkout_and_adds_never_double_bill() {
        let (cart, orders) = services();
        cart.add("S1", ProductId::new(1), 1).expect("add");

        let adder = {
            let cart = cart.clone();
            std::thread::spawn(move || {
                for _ in 0..50 {
                    let _ = cart.add("S1", ProductId::new(2), 1);
                }
            })
        };
        let order = orders.place_order("S1", "UPI").expect("place");
        adder.join().expect("adder thread");

        // Every billed line item must match the snapshot total exactly.
        let billed: i64 = order.items.iter().map(|item| item.price * item.qty).sum();
        assert_eq!(order.total, billed);
    }
}
