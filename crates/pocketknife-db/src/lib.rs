//! `SQLite` storage for the pocket-knife product catalog.
//!
//! Implements `pocketknife_core::ProductRepository` on top of `sqlx`.
//! Entry points call [`setup_database`] with the resolved database path
//! and hand the pool to [`ProductStoreFactory`].
#![deny(unsafe_code)]

pub mod error;
pub mod factory;
pub mod repositories;
pub mod setup;

pub use error::StoreError;

// Adapters hold the pool without depending on sqlx directly
pub use sqlx::SqlitePool;

// Re-export factory for convenient access
pub use factory::ProductStoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::SqliteProductRepository;

// Re-export setup functions for convenient access
pub use setup::{close_database, setup_database};
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
