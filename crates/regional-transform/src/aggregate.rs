//! Monthly aggregation per region.

use std::collections::BTreeMap;

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};
use regional_common::{any_to_f64, any_to_string};
use regional_model::columns::{
    AMOUNT, AVERAGE_AMOUNT, DATE, MONTH, OBSERVATION_COUNT, PERIOD, QUARTER, REGION, TOTAL_AMOUNT,
    YEAR,
};

use crate::error::Result;
use crate::schema::require_columns;

#[derive(Debug)]
struct PeriodGroup {
    year: i32,
    month: i32,
    quarter: String,
    total: f64,
    valued: i64,
    rows: i64,
}

/// Groups rows by `(region, period)` and emits sum, mean and row count of
/// `amount` per group, sorted by region then period.
///
/// `period` is `"YYYY-MM"`. Rows with a null region, year, month or quarter
/// are not assigned to any group.
pub fn aggregate_by_period(df: DataFrame) -> Result<DataFrame> {
    require_columns(&df, &[DATE, AMOUNT, REGION, YEAR, MONTH, QUARTER])?;
    let region_col = df.column(REGION)?;
    let amount_col = df.column(AMOUNT)?;
    let year_col = df.column(YEAR)?;
    let month_col = df.column(MONTH)?;
    let quarter_col = df.column(QUARTER)?;

    let mut groups: BTreeMap<(String, String), PeriodGroup> = BTreeMap::new();
    for row in 0..df.height() {
        let (Some(region), Some(year), Some(month), Some(quarter)) = (
            non_null(region_col.get(row)?),
            any_to_f64(year_col.get(row)?),
            any_to_f64(month_col.get(row)?),
            non_null(quarter_col.get(row)?),
        ) else {
            continue;
        };
        let (year, month) = (year as i32, month as i32);
        let period = format!("{year:04}-{month:02}");
        let group = groups
            .entry((region, period))
            .or_insert_with(|| PeriodGroup {
                year,
                month,
                quarter,
                total: 0.0,
                valued: 0,
                rows: 0,
            });
        group.rows += 1;
        if let Some(value) = any_to_f64(amount_col.get(row)?) {
            group.total += value;
            group.valued += 1;
        }
    }

    let len = groups.len();
    let mut regions = Vec::with_capacity(len);
    let mut periods = Vec::with_capacity(len);
    let mut years = Vec::with_capacity(len);
    let mut months = Vec::with_capacity(len);
    let mut quarters = Vec::with_capacity(len);
    let mut totals = Vec::with_capacity(len);
    let mut averages = Vec::with_capacity(len);
    let mut counts = Vec::with_capacity(len);
    for ((region, period), group) in groups {
        regions.push(region);
        periods.push(period);
        years.push(group.year);
        months.push(group.month);
        quarters.push(group.quarter);
        totals.push(group.total);
        averages.push((group.valued > 0).then(|| group.total / group.valued as f64));
        counts.push(group.rows);
    }

    let columns: Vec<Column> = vec![
        Series::new(REGION.into(), regions).into_column(),
        Series::new(PERIOD.into(), periods).into_column(),
        Series::new(YEAR.into(), years).into_column(),
        Series::new(MONTH.into(), months).into_column(),
        Series::new(QUARTER.into(), quarters).into_column(),
        Series::new(TOTAL_AMOUNT.into(), totals).into_column(),
        Series::new(AVERAGE_AMOUNT.into(), averages).into_column(),
        Series::new(OBSERVATION_COUNT.into(), counts).into_column(),
    ];
    Ok(DataFrame::new(columns)?)
}

fn non_null(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;
    use regional_model::columns::AGGREGATE_COLUMNS;

    fn enriched(rows: &[(&str, i32, i32, f64)]) -> DataFrame {
        DataFrame::new(vec![
            Series::new("date".into(), vec![0i32; rows.len()])
                .cast(&DataType::Date)
                .unwrap()
                .into_column(),
            Series::new(
                "amount".into(),
                rows.iter().map(|r| r.3).collect::<Vec<_>>(),
            )
            .into_column(),
            Series::new(
                "region".into(),
                rows.iter().map(|r| r.0).collect::<Vec<_>>(),
            )
            .into_column(),
            Series::new("year".into(), rows.iter().map(|r| r.1).collect::<Vec<_>>())
                .into_column(),
            Series::new("month".into(), rows.iter().map(|r| r.2).collect::<Vec<_>>())
                .into_column(),
            Series::new(
                "quarter".into(),
                rows.iter()
                    .map(|r| format!("{}Q{}", r.1, (r.2 - 1) / 3 + 1))
                    .collect::<Vec<_>>(),
            )
            .into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn sums_means_and_counts_per_region_month() {
        let df = enriched(&[
            ("South", 2024, 1, 500.0),
            ("North", 2024, 2, 10.0),
            ("North", 2024, 1, 1000.0),
            ("North", 2024, 1, 2000.0),
        ]);
        let out = aggregate_by_period(df).unwrap();

        let names: Vec<&str> = out.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, AGGREGATE_COLUMNS);
        assert_eq!(out.height(), 3);

        let periods: Vec<Option<&str>> =
            out.column("period").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(periods, [Some("2024-01"), Some("2024-02"), Some("2024-01")]);
        let totals: Vec<Option<f64>> = out
            .column("total_amount")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(totals, [Some(3000.0), Some(10.0), Some(500.0)]);
        let averages: Vec<Option<f64>> = out
            .column("average_amount")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(averages, [Some(1500.0), Some(10.0), Some(500.0)]);
        let counts: Vec<Option<i64>> = out
            .column("observation_count")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(counts, [Some(2), Some(1), Some(1)]);
        let quarters: Vec<Option<&str>> =
            out.column("quarter").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(quarters, [Some("2024Q1"), Some("2024Q1"), Some("2024Q1")]);
    }

    #[test]
    fn requires_enriched_columns() {
        let df = DataFrame::new(vec![
            Series::new("region".into(), vec!["North"]).into_column(),
        ])
        .unwrap();
        assert!(aggregate_by_period(df).is_err());
    }

    #[test]
    fn empty_input_gives_empty_output_with_schema() {
        let out = aggregate_by_period(enriched(&[])).unwrap();
        assert_eq!(out.height(), 0);
        assert_eq!(out.width(), 8);
    }
}
