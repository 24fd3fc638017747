//! CLI bootstrap - the composition root.
//!
//! This is the only place where the storage adapter is wired to the core
//! services. Handlers receive a [`CliContext`] and never open the
//! database themselves.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use pocketknife_core::{ProductService, database_path, env_file_path};
use pocketknife_db::{ProductStoreFactory, SqlitePool, close_database, setup_database};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Location of the product database file.
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Create config with the default data directory.
    ///
    /// Creates the data directory if it does not exist yet.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            database_path: database_path().context("Failed to resolve the data directory")?,
        })
    }
}

/// Composed context for product commands.
///
/// Owns the database pool for the lifetime of one command; call
/// [`CliContext::shutdown`] to close it.
pub struct CliContext {
    products: ProductService,
    pool: SqlitePool,
}

impl CliContext {
    /// Wrap an already opened pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            products: ProductStoreFactory::product_service(pool.clone()),
            pool,
        }
    }

    /// Access the product service.
    pub const fn products(&self) -> &ProductService {
        &self.products
    }

    /// Close the database, flushing pending writes.
    pub async fn shutdown(self) {
        close_database(self.pool).await;
    }
}

/// Open the product database and compose the context.
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let pool = setup_database(&config.database_path)
        .await
        .with_context(|| {
            format!(
                "Failed to open product database at {}",
                config.database_path.display()
            )
        })?;
    debug!(path = %config.database_path.display(), "Product database ready");
    Ok(CliContext::from_pool(pool))
}

/// Load `.env` files: first from the working directory, then from the
/// data directory. Variables already set are never overridden.
pub fn load_env() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!(path = %path.display(), "Loaded environment file");
    }
    if let Ok(path) = env_file_path() {
        if path.is_file() && dotenvy::from_path(&path).is_ok() {
            debug!(path = %path.display(), "Loaded environment file");
        }
    }
}
