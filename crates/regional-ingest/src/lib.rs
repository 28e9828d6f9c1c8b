//! Regional sales data ingestion.
//!
//! Reads one delimited-text export per region into a single Polars
//! `DataFrame`, labelling every row with the logical name of its source.
//!
//! # Example
//!
//! ```ignore
//! use regional_ingest::{CsvExtractor, discover_sources};
//! use regional_model::Extractor;
//!
//! let sources = discover_sources(Path::new("data/raw"))?;
//! let raw = CsvExtractor::new(sources).extract()?;
//! ```

mod discovery;
mod error;
mod extractor;
mod reader;

pub use discovery::{DATASET_PREFIX, discover_sources};
pub use error::{IngestError, Result};
pub use extractor::CsvExtractor;
pub use reader::{SourceTable, read_source_table};
