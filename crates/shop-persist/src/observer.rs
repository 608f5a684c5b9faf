//! Cart observer that keeps the persisted snapshot current

use crate::adapter::PersistenceAdapter;
use shop_cart::{CartEvent, CartObserver, CartState};
use std::fmt;
use std::sync::Arc;

/// Saves after add/remove, deletes after clear
///
/// Runs inside `CartStore::dispatch`, so the write has finished by the time
/// the caller sees the mutation complete. Write failures are logged; the
/// in-memory cart stays authoritative.
#[derive(Clone)]
pub struct PersistObserver {
    adapter: Arc<dyn PersistenceAdapter>,
}

impl PersistObserver {
    /// Observer writing through `adapter`
    #[inline]
    #[must_use]
    pub fn new(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self { adapter }
    }
}

impl CartObserver for PersistObserver {
    fn on_change(&self, event: &CartEvent, state: &CartState) {
        let result = match event {
            CartEvent::Cleared => self.adapter.delete(),
            CartEvent::Added { .. } | CartEvent::Removed { .. } => self.adapter.save(state),
        };

        if let Err(error) = result {
            tracing::error!(?event, %error, "failed to persist cart");
        }
    }
}

impl fmt::Debug for PersistObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistObserver").finish_non_exhaustive()
    }
}
