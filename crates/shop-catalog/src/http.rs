//! HTTP client for the store's JSON API
//!
//! Routes:
//! - `GET {base_url}{basename}/api/products`
//! - `GET {base_url}{basename}/api/products/{id}`

use crate::client::ProductCatalogClient;
use crate::error::CatalogError;
use crate::product::{Product, ProductId, ProductShortInfo};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Catalog client backed by the store backend
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    api_root: String,
}

impl HttpCatalogClient {
    /// Create client for `base_url` with the app mounted under `basename`
    ///
    /// # Errors
    /// Returns [`CatalogError::Transport`] if the HTTP client cannot be built
    pub fn new(base_url: &str, basename: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CatalogError::transport)?;

        Ok(Self {
            http,
            api_root: api_root(base_url, basename),
        })
    }

    /// Root URL all catalog routes hang off
    #[inline]
    #[must_use]
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// GET `url`; a non-success status is returned without a body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<(StatusCode, Option<T>), CatalogError> {
        tracing::debug!(%url, "catalog request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(CatalogError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Ok((status, None));
        }

        let body = response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                CatalogError::Decode(e.to_string())
            } else {
                CatalogError::transport(e)
            }
        })?;

        Ok((status, Some(body)))
    }
}

#[async_trait]
impl ProductCatalogClient for HttpCatalogClient {
    async fn list_products(&self) -> Result<Vec<ProductShortInfo>, CatalogError> {
        let url = format!("{}/products", self.api_root);
        match self.get_json::<Vec<ProductShortInfo>>(&url).await? {
            (_, Some(products)) => {
                for product in &products {
                    check_price(product.id, product.price)?;
                }
                Ok(products)
            }
            (status, None) => Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            }),
        }
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let url = format!("{}/products/{}", self.api_root, id);
        match self.get_json::<Product>(&url).await? {
            (_, Some(product)) => {
                check_price(product.id, product.price)?;
                Ok(product)
            }
            (status, None) if status == StatusCode::NOT_FOUND => Err(CatalogError::NotFound(id)),
            (status, None) => Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            }),
        }
    }
}

/// Reject prices a cart line could not hold
fn check_price(id: ProductId, price: f64) -> Result<(), CatalogError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::Decode(format!(
            "product {id} has invalid price {price}"
        )))
    }
}

/// Join base URL and basename into the API root, tolerating stray slashes
fn api_root(base_url: &str, basename: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mount = basename.trim_matches('/');
    if mount.is_empty() {
        format!("{base}/api")
    } else {
        format!("{base}/{mount}/api")
    }
}
