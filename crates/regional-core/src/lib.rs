//! Orchestration of the regional sales ETL.
//!
//! [`RegionalSalesPipeline`] wires a [`CsvExtractor`](regional_ingest::CsvExtractor),
//! the canonical transform steps and a loader chosen from the configured
//! output format, and runs them once: extract, transform, load.
//!
//! # Example
//!
//! ```ignore
//! use regional_core::{Pipeline, RegionalSalesPipeline, layout};
//!
//! let config = layout::default_config(Path::new("."), None)?;
//! RegionalSalesPipeline::new(config).run()?;
//! ```

pub mod error;
pub mod layout;
pub mod pipeline;

pub use error::{PipelineError, Result};
pub use pipeline::{Pipeline, RegionalSalesPipeline, RunReport};
