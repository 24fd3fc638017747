//! Path utilities for the pocket-knife data directory.
//!
//! Everything lives under a single data root:
//! - `products.db`, the product store
//! - `.env`, optional per-user configuration
//!
//! No terminal I/O happens here; callers report `PathError`s themselves.

mod database;
mod error;
mod platform;

pub use database::{DATABASE_FILE_NAME, database_path};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, env_file_path};
