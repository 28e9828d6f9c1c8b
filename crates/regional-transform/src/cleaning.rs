//! Row-level cleaning: missing critical values and exact duplicates.

use std::collections::HashSet;

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};
use regional_common::any_to_string;
use regional_model::columns::CRITICAL_COLUMNS;
use tracing::debug;

use crate::error::Result;
use crate::schema::require_columns;

/// Removes rows with a null (or NaN) `date`, `amount` or `region`.
///
/// Surviving rows keep their relative order.
pub fn drop_missing_critical(df: DataFrame) -> Result<DataFrame> {
    require_columns(&df, &CRITICAL_COLUMNS)?;
    let height = df.height();
    let mut keep = vec![true; height];
    for name in CRITICAL_COLUMNS {
        let column = df.column(name)?;
        for (idx, slot) in keep.iter_mut().enumerate() {
            if *slot && is_missing(&column.get(idx)?) {
                *slot = false;
            }
        }
    }
    let dropped = keep.iter().filter(|k| !**k).count();
    if dropped == 0 {
        return Ok(df);
    }
    debug!(dropped, "dropped rows with missing critical values");
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Removes rows equal to an earlier row across all columns.
///
/// Nulls compare equal to nulls. The first occurrence is kept.
pub fn deduplicate(df: DataFrame) -> Result<DataFrame> {
    let height = df.height();
    if height == 0 {
        return Ok(df);
    }
    let columns = df.get_columns();
    let mut seen: HashSet<Vec<Option<String>>> = HashSet::with_capacity(height);
    let mut keep = Vec::with_capacity(height);
    for idx in 0..height {
        let mut key = Vec::with_capacity(columns.len());
        for column in columns {
            let value = column.get(idx)?;
            key.push(if is_null(&value) {
                None
            } else {
                Some(any_to_string(value))
            });
        }
        keep.push(seen.insert(key));
    }
    let duplicates = height - seen.len();
    if duplicates == 0 {
        return Ok(df);
    }
    debug!(duplicates, "dropped duplicate rows");
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    Ok(df.filter(&mask)?)
}

fn is_null(value: &AnyValue<'_>) -> bool {
    matches!(value, AnyValue::Null)
}

fn is_missing(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::Float64(v) => v.is_nan(),
        AnyValue::Float32(v) => v.is_nan(),
        _ => false,
    }
}
