//! Delimited-text loader.

use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use regional_model::Loader;
use tracing::debug;

use crate::common::create_destination;
use crate::error::{OutputError, Result};

/// Writes comma-separated text with a header row and no index column.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    destination: PathBuf,
}

impl CsvLoader {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

impl Loader for CsvLoader {
    type Error = OutputError;

    fn load(&self, mut data: DataFrame) -> Result<()> {
        let mut file = create_destination(&self.destination)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .with_separator(b',')
            .finish(&mut data)
            .map_err(|source| OutputError::Write {
                path: self.destination.clone(),
                source,
            })?;
        debug!(path = %self.destination.display(), rows = data.height(), "wrote csv");
        Ok(())
    }
}
