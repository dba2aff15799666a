//! Commerce session workflows.
//!
//! Dependency direction, leaf first: [`catalog`] is used by [`cart`],
//! [`wishlist`], and [`chat`]; [`orders`] reads the cart's snapshot and
//! clears it at checkout; [`chat`] delegates to the Gemini client for
//! in-domain messages.

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod orders;
pub mod wishlist;

pub use cart::CartService;
pub use catalog::CatalogService;
pub use chat::ChatService;
pub use orders::OrderService;
pub use wishlist::WishlistService;
