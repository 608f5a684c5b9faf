//! Storefront configuration
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! basename = "/hw/store"
//! api_base_url = "http://localhost:3000"
//! storage_dir = ".storefront"
//! cart_key = "example-store-cart"
//! request_timeout_secs = 10
//! event_capacity = 64
//! ```

use serde::{Deserialize, Serialize};
use shop_persist::DEFAULT_CART_KEY;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Path prefix the app is mounted under
    pub basename: String,
    /// Backend origin for catalog requests
    pub api_base_url: String,
    /// Directory holding durable storage slots
    pub storage_dir: PathBuf,
    /// Storage key for the cart snapshot
    pub cart_key: String,
    /// Catalog request timeout in seconds
    pub request_timeout_secs: u64,
    /// Buffered cart events per presentation subscriber
    pub event_capacity: usize,
}

impl StorefrontConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns error on malformed TOML or out-of-range values
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns the first invalid field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.basename.is_empty() && !self.basename.starts_with('/') {
            return Err(ConfigError::Invalid {
                field: "basename",
                reason: format!("'{}' must start with '/'", self.basename),
            });
        }
        if self.cart_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "cart_key",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "request_timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "event_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// With backend origin
    #[inline]
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// With storage directory
    #[inline]
    #[must_use]
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    /// With cart storage key
    #[inline]
    #[must_use]
    pub fn with_cart_key(mut self, key: impl Into<String>) -> Self {
        self.cart_key = key.into();
        self
    }

    /// Request timeout as a duration
    #[inline]
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            basename: "/hw/store".to_string(),
            api_base_url: "http://localhost:3000".to_string(),
            storage_dir: PathBuf::from(".storefront"),
            cart_key: DEFAULT_CART_KEY.to_string(),
            request_timeout_secs: 10,
            event_capacity: 64,
        }
    }
}
