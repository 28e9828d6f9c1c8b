//! Calendar features.

use chrono::Datelike;
use polars::prelude::{DataFrame, DataType, NamedFrom, Series, SortMultipleOptions};
use regional_common::{days_to_date, quarter_of};
use regional_model::columns::{DATE, MONTH, QUARTER, REGION, YEAR};

use crate::error::{Result, TransformError};
use crate::schema::require_columns;

/// Adds `year`, `month` and `quarter` (`"2024Q1"`) from `date`, then sorts
/// rows by `(date, region)` ascending. Ties keep their input order.
pub fn enrich_time_features(mut df: DataFrame) -> Result<DataFrame> {
    require_columns(&df, &[DATE, REGION])?;
    let dates = df.column(DATE)?;
    if dates.dtype() != &DataType::Date {
        return Err(TransformError::DataValidation(format!(
            "date column must be a Date, found {}",
            dates.dtype()
        )));
    }

    let days = dates.cast(&DataType::Int32)?;
    let mut years = Vec::with_capacity(days.len());
    let mut months = Vec::with_capacity(days.len());
    let mut quarters = Vec::with_capacity(days.len());
    for day in days.i32()? {
        match day.and_then(days_to_date) {
            Some(date) => {
                let month = date.month();
                years.push(Some(date.year()));
                months.push(Some(month as i32));
                quarters.push(Some(format!("{}Q{}", date.year(), quarter_of(month))));
            }
            None => {
                years.push(None);
                months.push(None);
                quarters.push(None);
            }
        }
    }

    df.with_column(Series::new(YEAR.into(), years))?;
    df.with_column(Series::new(MONTH.into(), months))?;
    df.with_column(Series::new(QUARTER.into(), quarters))?;

    Ok(df.sort(
        [DATE, REGION],
        SortMultipleOptions::default().with_maintain_order(true),
    )?)
}
