//! Loaders for the regional sales aggregate.
//!
//! Both loaders create the destination's parent directory and truncate any
//! existing file; a run always leaves exactly one fully rewritten artifact.

mod common;
mod csv;
mod error;
mod parquet;

use std::path::PathBuf;

use regional_model::{Loader, OutputFormat};

pub use crate::csv::CsvLoader;
pub use crate::parquet::ParquetLoader;
pub use common::ensure_parent_dir;
pub use error::{OutputError, Result};

/// Picks the loader for a resolved output format.
pub fn loader_for(
    format: OutputFormat,
    destination: impl Into<PathBuf>,
) -> Box<dyn Loader<Error = OutputError>> {
    let destination = destination.into();
    match format {
        OutputFormat::DelimitedText => Box::new(CsvLoader::new(destination)),
        OutputFormat::ColumnarBinary => Box::new(ParquetLoader::new(destination)),
    }
}
