//! Cart store with change notification
//!
//! The store is the only owner of [`CartState`]. Every mutation runs to
//! completion, then each observer is called in registration order before
//! `dispatch` returns. Mutations take `&mut self`, so two can never interleave.

use crate::intent::{CartEvent, CartIntent};
use crate::line::{CartLine, ProductSnapshot};
use crate::state::{CartState, CartStateError};
use shop_catalog::ProductId;
use std::fmt;

/// Receives a notification after each cart change
///
/// `state` is the post-mutation state. Observers only read it.
pub trait CartObserver: Send + Sync {
    /// Called once per effective change
    fn on_change(&self, event: &CartEvent, state: &CartState);
}

impl<F> CartObserver for F
where
    F: Fn(&CartEvent, &CartState) + Send + Sync,
{
    fn on_change(&self, event: &CartEvent, state: &CartState) {
        self(event, state);
    }
}

/// Reducer-driven cart
pub struct CartStore {
    state: CartState,
    observers: Vec<Box<dyn CartObserver>>,
}

impl CartStore {
    /// Empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(CartState::new())
    }

    /// Store starting from a hydrated state
    #[inline]
    #[must_use]
    pub fn with_state(state: CartState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    /// Register an observer
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Number of registered observers
    #[inline]
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Apply an intent and notify observers
    ///
    /// Returns the emitted event, or `None` if the intent changed nothing.
    pub fn dispatch(&mut self, intent: CartIntent) -> Option<CartEvent> {
        let event = self.state.apply(intent)?;
        self.notify(&event);
        Some(event)
    }

    /// Add one unit of a product
    ///
    /// # Errors
    /// Returns [`CartStateError::InvalidPrice`] for a negative or non-finite
    /// price; the cart is left untouched and nobody is notified
    pub fn add_item(
        &mut self,
        product: impl Into<ProductSnapshot>,
    ) -> Result<CartEvent, CartStateError> {
        let snapshot = product.into();
        let event = self.state.add(snapshot.id, snapshot)?;
        self.notify(&event);
        Ok(event)
    }

    /// Remove a product's line; no-op if absent
    pub fn remove_item(&mut self, product_id: ProductId) -> Option<CartEvent> {
        let event = self.state.remove(product_id)?;
        self.notify(&event);
        Some(event)
    }

    /// Drop every line
    pub fn clear(&mut self) -> CartEvent {
        let event = self.state.clear();
        self.notify(&event);
        event
    }

    fn notify(&self, event: &CartEvent) {
        tracing::debug!(
            ?event,
            distinct = self.state.distinct_count(),
            "cart changed"
        );
        for observer in &self.observers {
            observer.on_change(event, &self.state);
        }
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Number of lines
    #[inline]
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.state.distinct_count()
    }

    /// Lines in first-added order
    #[inline]
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &CartLine> + '_ {
        self.state.lines()
    }

    /// Price times quantity for one line
    #[inline]
    #[must_use]
    pub fn line_total(&self, product_id: ProductId) -> Option<f64> {
        self.state.line_total(product_id)
    }

    /// Sum of all line totals
    #[inline]
    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.state.grand_total()
    }

    /// Check if product is in the cart
    #[inline]
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.state.contains(product_id)
    }

    /// Release the state, dropping observers
    #[inline]
    #[must_use]
    pub fn into_state(self) -> CartState {
        self.state
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
