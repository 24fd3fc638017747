//! Product repository trait definition.
//!
//! This port defines the interface for product persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewProduct, Product};

/// Repository for product persistence operations.
///
/// Every name-based lookup is case-insensitive. Implementations must use
/// one comparison rule for both the uniqueness constraint and all reads.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Inputs arrive already validated; the repository does not re-validate
/// - Each mutating method is a single atomic statement
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by case-insensitive name. `None` if absent.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;

    /// List every product ordered by name (byte-wise ascending).
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Insert a new product, returning it with its assigned ID.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the name collides
    /// case-insensitively with an existing product.
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;

    /// Set the price of an existing product and refresh `updated_at`.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no product matches.
    async fn update_price(&self, name: &str, price: f64) -> Result<Product, RepositoryError>;

    /// Delete a product, returning the row as it was before removal.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no product matches.
    async fn delete(&self, name: &str) -> Result<Product, RepositoryError>;

    /// Products with `min <= price <= max`, ordered by price then name.
    async fn list_by_price(&self, min: f64, max: f64) -> Result<Vec<Product>, RepositoryError>;

    /// Total number of products.
    async fn count(&self) -> Result<u64, RepositoryError>;
}
