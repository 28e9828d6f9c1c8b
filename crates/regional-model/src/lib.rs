//! Data model for the regional sales ETL.
//!
//! Holds the canonical column names, the source/load descriptors and the
//! immutable [`PipelineConfig`] they are bundled into, the supported output
//! formats, and the [`Extractor`] / [`Transformer`] / [`Loader`] contracts
//! the pipeline stages implement.

pub mod columns;
pub mod config;
pub mod contracts;
pub mod error;
pub mod format;

pub use config::{LoadDescriptor, PipelineConfig, SourceDescriptor};
pub use contracts::{Extractor, Loader, Transformer};
pub use error::{ModelError, Result};
pub use format::OutputFormat;
