//! Error types for configuration and format resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or resolving a pipeline configuration.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Output format tag is not one of the recognized formats.
    #[error("unsupported output format '{format}' (expected csv or parquet)")]
    UnsupportedFormat { format: String },

    /// Two sources share the same logical name.
    #[error("duplicate source name '{name}'")]
    DuplicateSource { name: String },

    /// Configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for a pipeline.
    #[error("invalid config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::UnsupportedFormat {
            format: "xml".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported output format 'xml' (expected csv or parquet)"
        );

        let err = ModelError::DuplicateSource {
            name: "north".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate source name 'north'");
    }
}
