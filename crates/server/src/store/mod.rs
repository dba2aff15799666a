//! In-process stores backing the storefront.
//!
//! Each store owns its records exclusively; cross-entity linkage is by id
//! lookup only, and everything handed out is a value copy, never a shared
//! mutable reference.
//!
//! ## Stores
//!
//! - [`catalog`] - immutable product records, seeded once at startup
//! - [`session_items`] - per-session (session, product) keyed maps, used
//!   for both the cart and the wishlist
//! - [`orders`] - immutable orders keyed by generated order id

pub mod catalog;
pub mod orders;
pub mod session_items;

pub use catalog::CatalogStore;
pub use orders::OrderStore;
pub use session_items::SessionItemStore;
