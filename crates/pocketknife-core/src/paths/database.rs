//! Database path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::data_root;

/// File name of the product store inside the data root.
pub const DATABASE_FILE_NAME: &str = "products.db";

/// Get the path to the product database, creating the data root if needed.
pub fn database_path() -> Result<PathBuf, PathError> {
    let root = data_root()?;
    ensure_dir(&root)?;
    Ok(root.join(DATABASE_FILE_NAME))
}

fn ensure_dir(dir: &Path) -> Result<(), PathError> {
    if dir.exists() {
        if dir.is_dir() {
            return Ok(());
        }
        return Err(PathError::NotADirectory(dir.to_path_buf()));
    }

    fs::create_dir_all(dir).map_err(|e| PathError::CreateFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}
