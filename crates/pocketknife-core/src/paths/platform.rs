//! Data root resolution.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the data root.
pub const DATA_DIR_ENV: &str = "POCKET_KNIFE_DATA_DIR";

const DEFAULT_DIR_NAME: &str = ".pocket-knife";

/// Root directory for pocket-knife data.
///
/// Resolution order:
/// 1. `POCKET_KNIFE_DATA_DIR` environment variable (if non-empty)
/// 2. `~/.pocket-knife`
///
/// The directory is not created here; see [`super::database_path`].
pub fn data_root() -> Result<PathBuf, PathError> {
    resolve_data_root(env::var_os(DATA_DIR_ENV), dirs::home_dir())
}

/// Location of the per-user `.env` file inside the data root.
pub fn env_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(".env"))
}

fn resolve_data_root(
    override_dir: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    home.map(|h| h.join(DEFAULT_DIR_NAME))
        .ok_or(PathError::NoHomeDir)
}
