//! Persisted snapshot envelope
//!
//! ```json
//! {"version":1,"saved_at":"2026-10-16T09:15:00Z","lines":[{"product_id":0,"snapshot":{...},"quantity":2}]}
//! ```

use crate::error::SnapshotError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shop_cart::CartState;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSnapshot {
    /// Format version
    pub version: u32,
    /// Time of the write
    pub saved_at: DateTime<Utc>,
    /// Lines in first-added order
    pub lines: CartState,
}

impl PersistedSnapshot {
    /// Snapshot of `state` stamped with the current time
    #[must_use]
    pub fn capture(state: &CartState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            lines: state.clone(),
        }
    }

    /// Encode as JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn encode(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode and validate JSON
    ///
    /// # Errors
    /// Returns error for malformed JSON, invalid lines, or an unknown version
    pub fn decode(raw: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(raw)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }

    /// Take the cart state out
    #[inline]
    #[must_use]
    pub fn into_state(self) -> CartState {
        self.lines
    }
}
