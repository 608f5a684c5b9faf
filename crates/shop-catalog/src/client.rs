//! Catalog client trait and in-memory implementation

use crate::error::CatalogError;
use crate::product::{Product, ProductId, ProductShortInfo};
use async_trait::async_trait;

/// Async source of catalog data
///
/// Implementations return fully resolved records or an error; there are no
/// partial results.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProductCatalogClient: Send + Sync {
    /// Fetch the catalog listing
    async fn list_products(&self) -> Result<Vec<ProductShortInfo>, CatalogError>;

    /// Fetch one product's detail record
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;
}

/// Fixed, in-memory catalog
///
/// Listing order is the order the products were supplied in.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Create catalog from product records
    #[inline]
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Number of products
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductCatalogClient for StaticCatalog {
    async fn list_products(&self) -> Result<Vec<ProductShortInfo>, CatalogError> {
        Ok(self.products.iter().map(Product::short_info).collect())
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}
