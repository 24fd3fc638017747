//! Product service - the product store's public operations.
//!
//! Validates and normalizes raw input, then delegates to the injected
//! `ProductRepository`. Uniqueness is enforced by the repository alone;
//! this service never pre-checks for duplicates.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{NewProduct, Product};
use crate::ports::{CoreError, ProductRepository};
use crate::validation::{
    MAX_PRICE_FIELD, check_non_negative, check_range, validate_name, validate_price,
};

/// Service for product catalog operations.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Create a new product service with the given repository.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Create a product from a raw name and price.
    ///
    /// The name is trimmed. Fails with `InvalidInput` for a blank name or an
    /// unparseable/negative price, and with `DuplicateName` if a product
    /// with the same case-insensitive name exists.
    pub async fn create(&self, name: &str, price: &str) -> Result<Product, CoreError> {
        let name = validate_name(name)?;
        let price = validate_price(price)?;

        debug!(%name, price, "Creating product");
        let product = self.repo.insert(&NewProduct::new(name, price)).await?;
        debug!(id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Case-insensitive exact lookup. Absence is not an error.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Product>, CoreError> {
        Ok(self.repo.find_by_name(name.trim()).await?)
    }

    /// Whether a product with this case-insensitive name exists.
    pub async fn exists(&self, name: &str) -> Result<bool, CoreError> {
        Ok(self.find_by_name(name).await?.is_some())
    }

    /// Every product, ordered by name ascending.
    pub async fn all(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.repo.list().await?)
    }

    /// Change the price of an existing product.
    ///
    /// The price is validated before the lookup, so an invalid price is
    /// reported even when the product does not exist.
    pub async fn update_price(&self, name: &str, new_price: &str) -> Result<Product, CoreError> {
        let price = validate_price(new_price)?;
        let name = name.trim();

        debug!(%name, price, "Updating product price");
        Ok(self.repo.update_price(name, price).await?)
    }

    /// Delete a product, returning a snapshot taken just before removal.
    pub async fn delete(&self, name: &str) -> Result<Product, CoreError> {
        let name = name.trim();
        debug!(%name, "Deleting product");
        Ok(self.repo.delete(name).await?)
    }

    /// Products priced at or below `max`, cheapest first (ties by name).
    pub async fn filter_by_max_price(&self, max: f64) -> Result<Vec<Product>, CoreError> {
        let max = check_non_negative(MAX_PRICE_FIELD, max)?;
        Ok(self.repo.list_by_price(0.0, max).await?)
    }

    /// Products priced within `[min, max]`, cheapest first (ties by name).
    pub async fn filter_by_price_range(
        &self,
        min: f64,
        max: f64,
    ) -> Result<Vec<Product>, CoreError> {
        let (min, max) = check_range(min, max)?;
        Ok(self.repo.list_by_price(min, max).await?)
    }

    /// Total number of products.
    pub async fn count(&self) -> Result<u64, CoreError> {
        Ok(self.repo.count().await?)
    }
}
