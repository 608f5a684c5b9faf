//! Persistence adapter over a storage slot

use crate::error::PersistError;
use crate::slot::StorageSlot;
use crate::snapshot::PersistedSnapshot;
use shop_cart::CartState;
use std::sync::Arc;

/// Storage key used by the storefront for the cart
pub const DEFAULT_CART_KEY: &str = "example-store-cart";

/// Save / load / delete contract for cart state
///
/// `load` never fails: a missing, unreadable or malformed snapshot all
/// come back as `None`.
pub trait PersistenceAdapter: Send + Sync {
    /// Write the post-mutation state
    ///
    /// # Errors
    /// Returns error if the snapshot cannot be encoded or written
    fn save(&self, state: &CartState) -> Result<(), PersistError>;

    /// Read the persisted state, if any usable one exists
    fn load(&self) -> Option<CartState>;

    /// Remove the persisted snapshot entirely
    ///
    /// # Errors
    /// Returns error if the slot cannot be written
    fn delete(&self) -> Result<(), PersistError>;
}

impl<P: PersistenceAdapter + ?Sized> PersistenceAdapter for Arc<P> {
    fn save(&self, state: &CartState) -> Result<(), PersistError> {
        (**self).save(state)
    }

    fn load(&self) -> Option<CartState> {
        (**self).load()
    }

    fn delete(&self) -> Result<(), PersistError> {
        (**self).delete()
    }
}

/// JSON snapshots in one key of a [`StorageSlot`]
#[derive(Debug, Clone)]
pub struct SlotPersistence<S> {
    slot: S,
    key: String,
}

impl<S: StorageSlot> SlotPersistence<S> {
    /// Adapter writing to `key` in `slot`
    #[inline]
    #[must_use]
    pub fn new(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    /// Adapter using [`DEFAULT_CART_KEY`]
    #[inline]
    #[must_use]
    pub fn with_default_key(slot: S) -> Self {
        Self::new(slot, DEFAULT_CART_KEY)
    }

    /// Storage key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying slot
    #[inline]
    #[must_use]
    pub fn slot(&self) -> &S {
        &self.slot
    }
}

impl<S: StorageSlot> PersistenceAdapter for SlotPersistence<S> {
    fn save(&self, state: &CartState) -> Result<(), PersistError> {
        let raw = PersistedSnapshot::capture(state).encode()?;
        self.slot.set(&self.key, &raw)?;
        Ok(())
    }

    fn load(&self) -> Option<CartState> {
        let raw = match self.slot.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no persisted cart");
                return None;
            }
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "persisted cart unreadable, starting empty");
                return None;
            }
        };

        match PersistedSnapshot::decode(&raw) {
            Ok(snapshot) => Some(snapshot.into_state()),
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "persisted cart malformed, starting empty");
                None
            }
        }
    }

    fn delete(&self) -> Result<(), PersistError> {
        self.slot.remove(&self.key)?;
        Ok(())
    }
}
