//! Default directory layout.
//!
//! ```text
//! <base>/data/raw/dataset_<name>.csv      one file per region
//! <base>/data/processed/regional_sales.*  the aggregate
//! ```

use std::path::{Path, PathBuf};

use regional_ingest::discover_sources;
use regional_model::{LoadDescriptor, OutputFormat, PipelineConfig};
use tracing::debug;

use crate::error::{PipelineError, Result};

pub const RAW_DIR: &str = "data/raw";
pub const PROCESSED_DIR: &str = "data/processed";
pub const OUTPUT_STEM: &str = "regional_sales";
pub const DEFAULT_FORMAT: OutputFormat = OutputFormat::DelimitedText;

/// Creates `data/raw` and `data/processed` under `base_dir` if missing.
///
/// Returns both directories.
pub fn ensure_layout(base_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let raw = base_dir.join(RAW_DIR);
    let processed = base_dir.join(PROCESSED_DIR);
    for dir in [&raw, &processed] {
        std::fs::create_dir_all(dir).map_err(|source| PipelineError::Layout {
            path: dir.clone(),
            source,
        })?;
    }
    Ok((raw, processed))
}

/// Builds a configuration from the default layout under `base_dir`.
///
/// Sources are the `dataset_*.csv` files in `data/raw`, sorted by file
/// name. The output goes to `data/processed/regional_sales.<ext>`; the format
/// tag defaults to `csv` and is validated before any directory is created.
pub fn default_config(base_dir: &Path, format: Option<&str>) -> Result<PipelineConfig> {
    let format = match format {
        Some(tag) => OutputFormat::parse(tag)?,
        None => DEFAULT_FORMAT,
    };
    let (raw, processed) = ensure_layout(base_dir)?;
    let sources = discover_sources(&raw)?;
    debug!(raw = %raw.display(), sources = sources.len(), "discovered sources");
    let output = processed.join(format!("{OUTPUT_STEM}.{}", format.extension()));
    Ok(PipelineConfig::new(
        sources,
        LoadDescriptor::new(output, format.tag()),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regional_model::ModelError;
    use tempfile::TempDir;

    #[test]
    fn creates_directories_and_discovers_sources() {
        let dir = TempDir::new().unwrap();
        let config = default_config(dir.path(), None).unwrap();
        assert!(dir.path().join("data/raw").is_dir());
        assert!(dir.path().join("data/processed").is_dir());
        assert!(config.sources().is_empty());
        assert_eq!(
            config.load().output_path,
            dir.path().join("data/processed/regional_sales.csv")
        );

        std::fs::write(dir.path().join("data/raw/dataset_south.csv"), "Fecha\n").unwrap();
        std::fs::write(dir.path().join("data/raw/dataset_north.csv"), "Fecha\n").unwrap();
        let config = default_config(dir.path(), Some("PARQUET")).unwrap();
        let names: Vec<&str> = config.sources().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["north", "south"]);
        assert_eq!(
            config.load().output_path,
            dir.path().join("data/processed/regional_sales.parquet")
        );
    }

    #[test]
    fn unknown_format_fails_before_creating_directories() {
        let dir = TempDir::new().unwrap();
        let err = default_config(dir.path(), Some("xml")).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Config(ModelError::UnsupportedFormat { .. })
        ));
        assert!(!dir.path().join("data").exists());
    }
}
