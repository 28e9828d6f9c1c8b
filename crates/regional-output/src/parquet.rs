//! Columnar-binary loader.

use std::path::{Path, PathBuf};

use polars::prelude::{DataFrame, ParquetWriter};
use regional_model::Loader;
use tracing::debug;

use crate::common::create_destination;
use crate::error::{OutputError, Result};

/// Writes an Apache Parquet file.
#[derive(Debug, Clone)]
pub struct ParquetLoader {
    destination: PathBuf,
}

impl ParquetLoader {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

impl Loader for ParquetLoader {
    type Error = OutputError;

    fn load(&self, mut data: DataFrame) -> Result<()> {
        let mut file = create_destination(&self.destination)?;
        ParquetWriter::new(&mut file)
            .finish(&mut data)
            .map_err(|source| OutputError::Write {
                path: self.destination.clone(),
                source,
            })?;
        debug!(path = %self.destination.display(), rows = data.height(), "wrote parquet");
        Ok(())
    }
}
