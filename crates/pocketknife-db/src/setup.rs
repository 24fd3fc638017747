//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with the product schema. Entry points call this
//! with the resolved database path.

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use tracing::debug;

use crate::error::StoreError;

/// Opens the `SQLite` database, creating the file and schema if needed.
///
/// This function:
/// 1. Creates the parent directory if it doesn't exist
/// 2. Opens (or creates) the database file
/// 3. Creates the `products` table and its indexes
///
/// # Errors
///
/// Returns a [`StoreError`] if the directory, the file or the schema
/// cannot be created. Callers treat every variant as "storage unavailable".
///
/// # Example
///
/// ```rust,no_run
/// use pocketknife_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), pocketknife_db::StoreError> {
/// let pool = setup_database(Path::new("/path/to/products.db")).await?;
/// pocketknife_db::close_database(pool).await;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool, StoreError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::Directory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    debug!(path = %db_path.display(), "Opening product database");

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await
    .map_err(|source| StoreError::Open {
        path: db_path.to_path_buf(),
        source,
    })?;

    create_schema(&pool).await.map_err(StoreError::Schema)?;

    Ok(pool)
}

/// Closes every pooled connection, flushing pending writes.
pub async fn close_database(pool: SqlitePool) {
    pool.close().await;
    debug!("Product database closed");
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool holds a single connection that never expires, since every
/// new in-memory connection would see an empty database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool, StoreError> {
    use sqlx::sqlite::SqlitePoolOptions;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .map_err(|source| StoreError::Open {
            path: ":memory:".into(),
            source,
        })?;
    create_schema(&pool).await.map_err(StoreError::Schema)?;
    Ok(pool)
}

/// Creates the product schema.
///
/// Safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL CHECK (price >= 0),
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        ",
    )
    .execute(pool)
    .await?;

    // Case-insensitive uniqueness; the only duplicate-name check
    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_products_name_nocase \
         ON products(name COLLATE NOCASE)",
    )
    .execute(pool)
    .await?;

    // Ordered listing by name
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_name ON products(name)")
        .execute(pool)
        .await?;

    // Price filters
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_price ON products(price)")
        .execute(pool)
        .await?;

    Ok(())
}
