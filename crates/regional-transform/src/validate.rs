//! Data-quality checks.
//!
//! Each check returns its input untouched or fails with
//! [`TransformError::DataValidation`].

use polars::prelude::{DataFrame, DataType};
use regional_common::is_numeric_dtype;
use regional_model::columns::{AMOUNT, DATE};

use crate::error::{Result, TransformError};
use crate::schema::require_columns;

/// Fails on a table with zero rows.
pub fn ensure_not_empty(df: DataFrame) -> Result<DataFrame> {
    if df.height() == 0 {
        return Err(TransformError::DataValidation("table is empty".to_string()));
    }
    Ok(df)
}

/// Fails unless `amount` has a numeric dtype and no nulls.
pub fn ensure_numeric_amount(df: DataFrame) -> Result<DataFrame> {
    require_columns(&df, &[AMOUNT])?;
    let amount = df.column(AMOUNT)?;
    if !is_numeric_dtype(amount.dtype()) {
        return Err(TransformError::DataValidation(format!(
            "amount column is not numeric (found {})",
            amount.dtype()
        )));
    }
    let nulls = amount.null_count();
    if nulls > 0 {
        return Err(TransformError::DataValidation(format!(
            "amount column contains {nulls} null values"
        )));
    }
    Ok(df)
}

/// Fails if any `amount` is strictly negative.
pub fn ensure_non_negative_amount(df: DataFrame) -> Result<DataFrame> {
    require_columns(&df, &[AMOUNT])?;
    let amount = df.column(AMOUNT)?.cast(&DataType::Float64)?;
    let negative = amount.f64()?.into_iter().flatten().filter(|v| *v < 0.0).count();
    if negative > 0 {
        return Err(TransformError::DataValidation(format!(
            "amount column contains {negative} negative values"
        )));
    }
    Ok(df)
}

/// Fails unless `date` is a null-free `Date` column in non-decreasing order.
pub fn ensure_sorted_by_date(df: DataFrame) -> Result<DataFrame> {
    require_columns(&df, &[DATE])?;
    let dates = df.column(DATE)?;
    if dates.dtype() != &DataType::Date {
        return Err(TransformError::DataValidation(format!(
            "date column is not a Date (found {})",
            dates.dtype()
        )));
    }
    if dates.null_count() > 0 {
        return Err(TransformError::DataValidation(
            "date column contains null values".to_string(),
        ));
    }
    let days = dates.cast(&DataType::Int32)?;
    let days: Vec<i32> = days.i32()?.into_iter().flatten().collect();
    if let Some(pos) = days.windows(2).position(|pair| pair[0] > pair[1]) {
        return Err(TransformError::DataValidation(format!(
            "rows are not sorted by date (row {} is earlier than row {pos})",
            pos + 1
        )));
    }
    Ok(df)
}
