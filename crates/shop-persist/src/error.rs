//! Error types for cart persistence
//!
//! - Storage slot failures (filesystem, bad key)
//! - Snapshot codec failures (malformed JSON, unknown version)

use std::path::PathBuf;

/// Errors from a [`StorageSlot`](crate::StorageSlot)
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// IO error on the backing file
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped onto the backend
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),
}

impl StorageError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors encoding or decoding a [`PersistedSnapshot`](crate::PersistedSnapshot)
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// JSON syntax or shape error, including invalid cart lines
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Written by an incompatible format version
    #[error("unsupported snapshot version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Errors from a [`PersistenceAdapter`](crate::PersistenceAdapter)
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Slot read or write failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Snapshot could not be encoded
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persist_error_wraps_storage() {
        let err: PersistError = StorageError::InvalidKey("../etc".to_string()).into();
        assert!(err.to_string().contains("invalid storage key"));
    }

    #[test]
    fn unsupported_version_display() {
        let err = SnapshotError::UnsupportedVersion {
            found: 7,
            supported: 1,
        };
        assert_eq!(
            err.to_string(),
            "unsupported snapshot version 7 (supported: 1)"
        );
    }
}
