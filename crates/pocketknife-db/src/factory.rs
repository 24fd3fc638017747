//! Composition utilities for wiring the product store.
//!
//! Construction only; no domain logic lives here.

use std::sync::Arc;

use sqlx::SqlitePool;

use pocketknife_core::{ProductRepository, ProductService};

use crate::repositories::SqliteProductRepository;

/// Factory for `SQLite`-backed product components.
pub struct ProductStoreFactory;

impl ProductStoreFactory {
    /// Create a product repository from a pool.
    pub fn product_repository(pool: SqlitePool) -> Arc<SqliteProductRepository> {
        Arc::new(SqliteProductRepository::new(pool))
    }

    /// Build a `ProductService` over a `SQLite` repository.
    ///
    /// This is the recommended way for adapters to obtain the service.
    pub fn product_service(pool: SqlitePool) -> ProductService {
        let repo: Arc<dyn ProductRepository> = Self::product_repository(pool);
        ProductService::new(repo)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a product repository using this test database.
    pub fn product_repository(&self) -> SqliteProductRepository {
        SqliteProductRepository::new(self.pool.clone())
    }

    /// Create a product service using this test database.
    pub fn product_service(&self) -> ProductService {
        ProductStoreFactory::product_service(self.pool.clone())
    }
}
