//! Type normalization for the critical columns.

use polars::prelude::{AnyValue, Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use regional_common::{
    any_to_string, date_to_days, is_numeric_dtype, parse_date_flexible, parse_f64, title_case,
};
use regional_model::columns::{AMOUNT, CRITICAL_COLUMNS, DATE, REGION};

use crate::error::{Result, TransformError};
use crate::schema::require_columns;

/// Coerces `date` to `Date`, `amount` to `Float64` and tidies `region`.
///
/// Region labels are trimmed, hyphens become spaces and the result is
/// title-cased. Nulls stay null. Any value that cannot be converted fails
/// the whole table.
pub fn normalize_dtypes(mut df: DataFrame) -> Result<DataFrame> {
    require_columns(&df, &CRITICAL_COLUMNS)?;
    let date = normalize_date(df.column(DATE)?)?;
    let amount = normalize_amount(df.column(AMOUNT)?)?;
    let region = normalize_region(df.column(REGION)?)?;
    df.with_column(date)?;
    df.with_column(amount)?;
    df.with_column(region)?;
    Ok(df)
}

fn normalize_date(column: &Column) -> Result<Column> {
    match column.dtype() {
        DataType::Date => return Ok(column.clone()),
        DataType::Datetime(_, _) => return Ok(column.cast(&DataType::Date)?),
        _ => {}
    }
    let mut days = Vec::with_capacity(column.len());
    for row in 0..column.len() {
        let value = column.get(row)?;
        let parsed = match value {
            AnyValue::Null => None,
            AnyValue::String(text) => Some(
                parse_date_flexible(text).ok_or_else(|| coercion(DATE, row, text, "a date"))?,
            ),
            AnyValue::StringOwned(ref text) => Some(
                parse_date_flexible(text)
                    .ok_or_else(|| coercion(DATE, row, text.as_str(), "a date"))?,
            ),
            other => return Err(coercion(DATE, row, &any_to_string(other), "a date")),
        };
        days.push(parsed.map(date_to_days));
    }
    Ok(Series::new(DATE.into(), days)
        .cast(&DataType::Date)?
        .into_column())
}

fn normalize_amount(column: &Column) -> Result<Column> {
    let dtype = column.dtype();
    if dtype == &DataType::Float64 {
        return Ok(column.clone());
    }
    if is_numeric_dtype(dtype) {
        return Ok(column.cast(&DataType::Float64)?);
    }
    let mut amounts = Vec::with_capacity(column.len());
    for row in 0..column.len() {
        let value = column.get(row)?;
        let parsed = match value {
            AnyValue::Null => None,
            AnyValue::String(text) => {
                Some(parse_f64(text).ok_or_else(|| coercion(AMOUNT, row, text, "a number"))?)
            }
            AnyValue::StringOwned(ref text) => Some(
                parse_f64(text).ok_or_else(|| coercion(AMOUNT, row, text.as_str(), "a number"))?,
            ),
            other => return Err(coercion(AMOUNT, row, &any_to_string(other), "a number")),
        };
        amounts.push(parsed);
    }
    Ok(Series::new(AMOUNT.into(), amounts).into_column())
}

fn normalize_region(column: &Column) -> Result<Column> {
    let mut labels = Vec::with_capacity(column.len());
    for row in 0..column.len() {
        let value = column.get(row)?;
        let label = match value {
            AnyValue::Null => None,
            other => Some(tidy_region(&any_to_string(other))),
        };
        labels.push(label);
    }
    Ok(Series::new(REGION.into(), labels).into_column())
}

fn tidy_region(raw: &str) -> String {
    title_case(&raw.trim().replace('-', " "))
}

fn coercion(column: &str, row: usize, value: &str, expected: &'static str) -> TransformError {
    TransformError::TypeCoercion {
        column: column.to_string(),
        row,
        value: value.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn frame(date: Column, amount: Column, region: Column) -> DataFrame {
        DataFrame::new(vec![date, amount, region]).unwrap()
    }

    fn text(name: &str, values: &[Option<&str>]) -> Column {
        Series::new(name.into(), values.to_vec()).into_column()
    }

    #[test]
    fn coerces_text_columns() {
        let df = frame(
            text("date", &[Some("2024-01-05"), Some("20/01/2024"), None]),
            text("amount", &[Some("1000"), Some(" 2.5 "), None]),
            text("region", &[Some("  north-east "), Some("SOUTH"), None]),
        );
        let out = normalize_dtypes(df).unwrap();

        assert_eq!(out.column("date").unwrap().dtype(), &DataType::Date);
        let days: Vec<Option<i32>> = out
            .column("date")
            .unwrap()
            .cast(&DataType::Int32)
            .unwrap()
            .i32()
            .unwrap()
            .into_iter()
            .collect();
        let jan5 = date_to_days(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(days, [Some(jan5), Some(jan5 + 15), None]);

        let amounts: Vec<Option<f64>> =
            out.column("amount").unwrap().f64().unwrap().into_iter().collect();
        assert_eq!(amounts, [Some(1000.0), Some(2.5), None]);

        let regions: Vec<Option<&str>> =
            out.column("region").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(regions, [Some("North East"), Some("South"), None]);
    }

    #[test]
    fn casts_integer_amounts() {
        let df = frame(
            text("date", &[Some("2024-01-05")]),
            Series::new("amount".into(), vec![7i64]).into_column(),
            text("region", &[Some("north")]),
        );
        let out = normalize_dtypes(df).unwrap();
        assert_eq!(out.column("amount").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn keeps_column_order() {
        let df = frame(
            text("date", &[Some("2024-01-05")]),
            text("amount", &[Some("1")]),
            text("region", &[Some("north")]),
        );
        let out = normalize_dtypes(df).unwrap();
        let names: Vec<&str> = out.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, ["date", "amount", "region"]);
    }

    #[test]
    fn reports_unparseable_amount() {
        let df = frame(
            text("date", &[Some("2024-01-05"), Some("2024-01-06")]),
            text("amount", &[Some("10"), Some("ten")]),
            text("region", &[Some("north"), Some("north")]),
        );
        let err = normalize_dtypes(df).unwrap_err();
        assert!(matches!(
            err,
            TransformError::TypeCoercion { ref column, row: 1, ref value, .. }
                if column == "amount" && value == "ten"
        ));
    }

    #[test]
    fn reports_unparseable_date() {
        let df = frame(
            text("date", &[Some("yesterday")]),
            text("amount", &[Some("10")]),
            text("region", &[Some("north")]),
        );
        let err = normalize_dtypes(df).unwrap_err();
        assert!(matches!(err, TransformError::TypeCoercion { row: 0, .. }));
    }
}
