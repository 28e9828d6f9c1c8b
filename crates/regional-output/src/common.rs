//! Shared file-system helpers for loaders.

use std::fs::{self, File};
use std::path::Path;

use crate::error::{OutputError, Result};

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Creates (or truncates) the destination after ensuring its directory exists.
pub(crate) fn create_destination(path: &Path) -> Result<File> {
    ensure_parent_dir(path)?;
    File::create(path).map_err(|source| OutputError::CreateFile {
        path: path.to_path_buf(),
        source,
    })
}
