//! Storefront composition root
//!
//! Owns the catalog client, the persistence adapter and the cart store.
//!
//! # Lifecycle
//! 1. `init`: load the persisted snapshot (absent or malformed means empty)
//! 2. Build the [`CartStore`] from it and attach the persistence observer
//!    and the event broadcaster
//! 3. Hand the container to the presentation layer
//! 4. Mutate any number of times through [`Storefront::dispatch`]
//! 5. Optionally [`Storefront::teardown`]
//!
//! The cart is never observable in an empty state before hydration finishes.

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::nav::{self, NavLink};
use crate::view::{CartSummary, CatalogRow, ProductView};
use shop_cart::{CartEvent, CartIntent, CartState, CartStore};
use shop_catalog::{HttpCatalogClient, ProductCatalogClient, ProductId};
use shop_persist::{FileStorage, PersistObserver, PersistenceAdapter, SlotPersistence};
use std::fmt;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Application-wide state container
pub struct Storefront<C> {
    config: StorefrontConfig,
    catalog: C,
    persistence: Arc<dyn PersistenceAdapter>,
    cart: CartStore,
    events: broadcast::Sender<CartEvent>,
}

impl<C: ProductCatalogClient> Storefront<C> {
    /// Hydrate the cart and wire observers
    pub fn init(
        catalog: C,
        persistence: Arc<dyn PersistenceAdapter>,
        config: StorefrontConfig,
    ) -> Self {
        let state = persistence.load().unwrap_or_default();
        tracing::info!(
            distinct = state.distinct_count(),
            total_quantity = state.total_quantity(),
            "cart hydrated"
        );

        let mut cart = CartStore::with_state(state);
        cart.subscribe(PersistObserver::new(Arc::clone(&persistence)));

        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        let sender = events.clone();
        cart.subscribe(move |event: &CartEvent, _: &CartState| {
            // No receivers is fine; presentation may not be listening yet.
            let _ = sender.send(*event);
        });

        Self {
            config,
            catalog,
            persistence,
            cart,
            events,
        }
    }

    /// Apply a cart intent
    ///
    /// The snapshot is written before this returns.
    pub fn dispatch(&mut self, intent: CartIntent) -> Option<CartEvent> {
        self.cart.dispatch(intent)
    }

    /// Fetch a product and add one unit of it
    ///
    /// # Errors
    /// Returns the catalog error, or a cart error for a product with an
    /// unusable price; either way the cart is left untouched
    pub async fn add_product(&mut self, id: ProductId) -> Result<CartEvent, StorefrontError> {
        let product = self.catalog.get_product(id).await.map_err(|error| {
            tracing::warn!(%id, %error, "product fetch failed, cart unchanged");
            error
        })?;

        Ok(self.cart.add_item(product)?)
    }

    /// Resolve a product detail view
    pub async fn product_view(&self, id: ProductId) -> ProductView {
        ProductView::from_result(id, self.catalog.get_product(id).await)
    }

    /// Catalog listing with "in cart" flags
    ///
    /// # Errors
    /// Returns the catalog error for display
    pub async fn list_catalog(&self) -> Result<Vec<CatalogRow>, StorefrontError> {
        let products = self.catalog.list_products().await?;
        Ok(products
            .into_iter()
            .map(|product| CatalogRow {
                in_cart: self.cart.contains(product.id),
                product,
            })
            .collect())
    }

    /// Subscribe to cart events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }

    /// Cart store (read-only)
    #[inline]
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Current cart state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &CartState {
        self.cart.state()
    }

    /// Check if product has a cart line
    #[inline]
    #[must_use]
    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.cart.contains(id)
    }

    /// Cart page contents
    #[must_use]
    pub fn cart_summary(&self) -> CartSummary {
        CartSummary::from_state(self.cart.state())
    }

    /// Header cart link text
    #[must_use]
    pub fn cart_label(&self) -> String {
        nav::cart_label(self.cart.distinct_count())
    }

    /// Header links
    #[must_use]
    pub fn nav_links(&self) -> Vec<NavLink> {
        nav::nav_links(&self.config.basename, self.cart.distinct_count())
    }

    /// Catalog client
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Persistence adapter
    #[inline]
    #[must_use]
    pub fn persistence(&self) -> &Arc<dyn PersistenceAdapter> {
        &self.persistence
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Shut down, returning the final state
    ///
    /// The persisted snapshot already reflects this state.
    #[must_use]
    pub fn teardown(self) -> CartState {
        tracing::debug!(distinct = self.cart.distinct_count(), "storefront teardown");
        self.cart.into_state()
    }
}

impl Storefront<HttpCatalogClient> {
    /// Storefront over the HTTP catalog and file storage named in `config`
    ///
    /// # Errors
    /// Returns error if the config is invalid or the HTTP client cannot be built
    pub fn open(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        config.validate()?;
        let catalog = HttpCatalogClient::new(
            &config.api_base_url,
            &config.basename,
            config.request_timeout(),
        )?;
        let persistence = Arc::new(SlotPersistence::new(
            FileStorage::new(&config.storage_dir),
            config.cart_key.clone(),
        ));
        Ok(Self::init(catalog, persistence, config))
    }
}

impl<C> fmt::Debug for Storefront<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("config", &self.config)
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}
