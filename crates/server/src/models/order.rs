//! Immutable order records.

use chrono::{DateTime, Utc};
use clementine_core::{OrderId, ProductId, SessionId};
use serde::Serialize;

/// Status written on every order at creation. Orders have no fulfillment
/// state machine; this value never changes afterwards.
pub const STATUS_CONFIRMED: &str = "Order Confirmed";

/// Synthetic status returned by order tracking when the order does not
/// exist or belongs to another session. Never persisted.
pub const STATUS_NOT_FOUND: &str = "NOT_FOUND";

/// A frozen (product, name, unit price, qty) tuple recorded inside an
/// order, independent of later catalog or cart changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: i64,
    pub qty: i64,
}

/// An immutable record of a completed checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub session_id: SessionId,
    pub items: Vec<LineItem>,
    pub total: i64,
    pub payment_method: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Result of an order-tracking lookup.
///
/// Tracking deliberately never fails for "order doesn't exist / doesn't
/// belong to you": a miss is a successful response carrying
/// [`STATUS_NOT_FOUND`] and a human-readable message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTrack {
    pub order_id: OrderId,
    pub status: String,
    pub message: String,
}

impl OrderTrack {
    /// Track response for an order found under the owning session.
    #[must_use]
    pub fn found(order: &Order) -> Self {
        Self {
            order_id: order.id.clone(),
            status: order.status.clone(),
            message: format!(
                "Order {}: {} and currently in transit.",
                order.id, order.status
            ),
        }
    }

    /// Soft miss: unknown id, or an order owned by a different session.
    #[must_use]
    pub fn not_found(order_id: OrderId) -> Self {
        Self {
            order_id,
            status: STATUS_NOT_FOUND.to_string(),
            message: "Order not found. Please check order ID from your recent orders.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_found_message_embeds_id_and_status() {
        let order = Order {
            id: OrderId::new("ORD1234567".to_string()),
            session_id: SessionId::parse("S1").expect("valid session"),
            items: vec![],
            total: 0,
            payment_method: "UPI".to_string(),
            status: STATUS_CONFIRMED.to_string(),
            created_at: Utc::now(),
        };

        let track = OrderTrack::found(&order);
        assert_eq!(track.status, STATUS_CONFIRMED);
        assert_eq!(
            track.message,
            "Order ORD1234567: Order Confirmed and currently in transit."
        );
    }

    #[test]
    fn test_track_not_found_is_soft() {
        let track = OrderTrack::not_found(OrderId::normalized("ord999"));
        assert_eq!(track.status, STATUS_NOT_FOUND);
        assert_eq!(track.order_id.as_str(), "ORD999");
        assert!(track.message.contains("not found"));
    }
}
