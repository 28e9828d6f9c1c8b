//! Pipeline configuration.
//!
//! A [`PipelineConfig`] is built once, either programmatically or from a TOML
//! file, and never changes afterwards.
//!
//! ```toml
//! [[sources]]
//! name = "north"
//! path = "raw/dataset_north.csv"
//!
//! [load]
//! output_path = "processed/regional_sales.parquet"
//! format = "parquet"
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ModelError, Result};
use crate::format::OutputFormat;

const DEFAULT_FORMAT: &str = "parquet";

/// One named input file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceDescriptor {
    /// Logical name; becomes the `region` value of every row from this file.
    pub name: String,
    pub path: PathBuf,
}

impl SourceDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Where and how the aggregate is written.
///
/// The format is kept as the raw tag; it is resolved (and rejected if
/// unknown) when the pipeline is run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoadDescriptor {
    pub output_path: PathBuf,
    #[serde(default = "default_format")]
    pub format: String,
}

impl LoadDescriptor {
    pub fn new(output_path: impl Into<PathBuf>, format: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
            format: format.into(),
        }
    }

    /// Resolves the format tag.
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::parse(&self.format)
    }
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

/// Immutable configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    sources: Vec<SourceDescriptor>,
    load: LoadDescriptor,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    sources: Vec<SourceDescriptor>,
    load: LoadDescriptor,
}

impl PipelineConfig {
    /// Bundles sources and load target.
    ///
    /// Fails with [`ModelError::DuplicateSource`] if two sources share a name.
    /// An empty source list is accepted here and rejected at extraction.
    pub fn new(sources: Vec<SourceDescriptor>, load: LoadDescriptor) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for source in &sources {
            if !seen.insert(source.name.as_str()) {
                return Err(ModelError::DuplicateSource {
                    name: source.name.clone(),
                });
            }
        }
        Ok(Self { sources, load })
    }

    /// Loads a configuration file; relative paths resolve against its directory.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_toml_str(&text, base_dir).map_err(|err| match err {
            ModelError::ConfigParse { message, .. } => ModelError::ConfigParse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parses configuration text, resolving relative paths against `base_dir`.
    pub fn from_toml_str(text: &str, base_dir: &Path) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text).map_err(|err| ModelError::ConfigParse {
            path: base_dir.to_path_buf(),
            message: err.message().to_string(),
        })?;
        let sources = file
            .sources
            .into_iter()
            .map(|source| SourceDescriptor {
                path: resolve(base_dir, source.path),
                name: source.name,
            })
            .collect();
        let load = LoadDescriptor {
            output_path: resolve(base_dir, file.load.output_path),
            format: file.load.format,
        };
        Self::new(sources, load)
    }

    pub fn sources(&self) -> &[SourceDescriptor] {
        &self.sources
    }

    pub fn load(&self) -> &LoadDescriptor {
        &self.load
    }
}

fn resolve(base_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}
