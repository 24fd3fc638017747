//! Errors raised while opening the product store.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to open or initialize the database.
///
/// Any of these means the storage backend is unavailable; adapters map
/// it to `CoreError::BackendUnavailable`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The parent directory of the database file could not be created.
    #[error("Cannot create database directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The database file could not be opened or created.
    #[error("Cannot open database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    /// Creating tables or indexes failed.
    #[error("Cannot initialize database schema: {0}")]
    Schema(#[source] sqlx::Error),
}
