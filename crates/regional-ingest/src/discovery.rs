//! Source discovery for the default directory layout.

use std::path::Path;

use regional_model::SourceDescriptor;

use crate::error::{IngestError, Result};

/// File-name prefix of regional exports; stripped to form the source name.
pub const DATASET_PREFIX: &str = "dataset_";

/// Lists `dataset_*.csv` files in a directory as source descriptors.
///
/// Returns sources sorted by filename. The source name is the file stem
/// without the `dataset_` prefix, so `dataset_north.csv` becomes `north`.
pub fn discover_sources(dir: &Path) -> Result<Vec<SourceDescriptor>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.strip_prefix(DATASET_PREFIX));

        if let (true, Some(name)) = (is_csv, name) {
            files.push(SourceDescriptor::new(name, path.clone()));
        }
    }

    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    Ok(files)
}
