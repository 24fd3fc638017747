//! `SQLite` implementation of the `ProductRepository` trait.
//!
//! Every mutation is a single statement with `RETURNING`, so each one is
//! atomic on its own. Name comparisons use `COLLATE NOCASE`, matching the
//! unique index that enforces case-insensitive uniqueness.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use pocketknife_core::{NewProduct, Product, ProductRepository, RepositoryError};

use super::row_mappers::{PRODUCT_COLUMNS, format_datetime, row_to_product};

/// `SQLite` implementation of the `ProductRepository` trait.
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new `SQLite` product repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Map `SQLx` errors to `RepositoryError`.
///
/// `name` is the product name the statement was operating on.
fn map_sqlx_error(e: sqlx::Error, name: &str) -> RepositoryError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return RepositoryError::AlreadyExists(name.to_string());
        }
        if db.is_check_violation() {
            return RepositoryError::Constraint(db.message().to_string());
        }
    }
    RepositoryError::Storage(e.to_string())
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let query =
            format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE name = ? COLLATE NOCASE");

        let row = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, name))?;

        row.as_ref().map(row_to_product).transpose()
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name ASC, id ASC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_product).collect()
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let created_at = format_datetime(&product.created_at);
        let query = format!(
            "INSERT INTO products (name, price, created_at, updated_at) \
             VALUES (?, ?, ?, ?) RETURNING {PRODUCT_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(&product.name)
            .bind(product.price)
            .bind(&created_at)
            .bind(&created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, &product.name))?;

        let stored = row_to_product(&row)?;
        debug!(id = stored.id, name = %stored.name, "Inserted product");
        Ok(stored)
    }

    async fn update_price(&self, name: &str, price: f64) -> Result<Product, RepositoryError> {
        let updated_at = format_datetime(&Utc::now());
        let query = format!(
            "UPDATE products SET price = ?, updated_at = ? \
             WHERE name = ? COLLATE NOCASE RETURNING {PRODUCT_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(price)
            .bind(&updated_at)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, name))?
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))?;

        row_to_product(&row)
    }

    async fn delete(&self, name: &str) -> Result<Product, RepositoryError> {
        let query = format!(
            "DELETE FROM products WHERE name = ? COLLATE NOCASE RETURNING {PRODUCT_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, name))?
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))?;

        let removed = row_to_product(&row)?;
        debug!(id = removed.id, name = %removed.name, "Deleted product");
        Ok(removed)
    }

    async fn list_by_price(&self, min: f64, max: f64) -> Result<Vec<Product>, RepositoryError> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE price BETWEEN ? AND ? ORDER BY price ASC, name ASC"
        );

        let rows = sqlx::query(&query)
            .bind(min)
            .bind(max)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_product).collect()
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        u64::try_from(count).map_err(|e| RepositoryError::Storage(e.to_string()))
    }
}
