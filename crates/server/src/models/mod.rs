//! Domain models for the storefront.

pub mod item;
pub mod order;
pub mod product;

pub use item::{CartItem, WishlistItem};
pub use order::{LineItem, Order, OrderTrack, STATUS_CONFIRMED, STATUS_NOT_FOUND};
pub use product::{Category, Product};
