//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::gemini::{GeminiClient, GeminiError};
use crate::services::{CartService, CatalogService, ChatService, OrderService, WishlistService};
use crate::store::CatalogStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the commerce services.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    catalog: CatalogService,
    cart: CartService,
    wishlist: WishlistService,
    orders: OrderService,
    chat: ChatService,
}

impl AppState {
    /// Create the application state: seed the catalog and wire the
    /// services together.
    ///
    /// # Errors
    ///
    /// Returns an error if the Gemini HTTP client fails to build.
    pub fn new(config: AppConfig) -> Result<Self, GeminiError> {
        let catalog_store = Arc::new(CatalogStore::seed(config.catalog_size));
        tracing::info!(products = catalog_store.len(), "Catalog seeded");

        let catalog = CatalogService::new(catalog_store);
        let cart = CartService::new(catalog.clone());
        let wishlist = WishlistService::new(catalog.clone());
        let orders = OrderService::new(cart.clone());
        let gemini = GeminiClient::new(&config.gemini)?;
        let chat = ChatService::new(catalog.clone(), gemini);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
                wishlist,
                orders,
                chat,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog query engine.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Get a reference to the cart workflow.
    #[must_use]
    pub fn cart(&self) -> &CartService {
        &self.inner.cart
    }

    /// Get a reference to the wishlist workflow.
    #[must_use]
    pub fn wishlist(&self) -> &WishlistService {
        &self.inner.wishlist
    }

    /// Get a reference to the order workflow.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }

    /// Get a reference to the chat assistant.
    #[must_use]
    pub fn chat(&self) -> &ChatService {
        &self.inner.chat
    }
}
