//! Pipeline-level error type.

use std::path::PathBuf;

use regional_ingest::IngestError;
use regional_model::ModelError;
use regional_output::OutputError;
use regional_transform::TransformError;
use thiserror::Error;

/// Any failure of a pipeline run. Stage errors pass through unchanged.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ModelError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Output(#[from] OutputError),

    /// Default directory layout could not be prepared.
    #[error("failed to prepare {path}: {source}")]
    Layout {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
