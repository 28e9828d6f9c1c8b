//! Stage contracts.
//!
//! A pipeline run is extract -> transform -> load. Each stage owns its error
//! type so callers can wrap them without losing the variant.

use polars::prelude::DataFrame;

/// Produces the raw record table.
pub trait Extractor {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads every configured source and returns the combined table.
    fn extract(&self) -> Result<DataFrame, Self::Error>;
}

/// Turns one table into another.
pub trait Transformer {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Consumes the input table and returns its replacement.
    fn transform(&self, data: DataFrame) -> Result<DataFrame, Self::Error>;
}

/// Persists the final table.
pub trait Loader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Writes the whole table, replacing any previous artifact.
    fn load(&self, data: DataFrame) -> Result<(), Self::Error>;
}
