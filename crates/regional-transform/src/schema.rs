//! Column presence checks.

use polars::prelude::DataFrame;
use regional_model::columns::CRITICAL_COLUMNS;

use crate::error::{Result, TransformError};

/// Fails with every name in `required` that `df` lacks, in the given order.
pub fn require_columns(df: &DataFrame, required: &[&str]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| df.column(name).is_err())
        .map(|name| (*name).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(TransformError::MissingColumns { columns: missing })
    }
}

/// Passes the table through unchanged if it has `date`, `amount` and `region`.
pub fn ensure_schema(df: DataFrame) -> Result<DataFrame> {
    require_columns(&df, &CRITICAL_COLUMNS)?;
    Ok(df)
}
