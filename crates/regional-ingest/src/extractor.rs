//! Multi-source CSV extraction.

use std::collections::HashSet;

use polars::prelude::{
    Column, DataFrame, DataType, IntoColumn, NamedFrom, PlSmallStr, Series, StringChunked,
};
use regional_common::{date_to_days, parse_day_first_date, parse_locale_amount};
use regional_model::columns::{AMOUNT, DATE, REGION};
use regional_model::{Extractor, SourceDescriptor};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::reader::{SourceTable, read_source_table};

/// Reads every configured source, in order, into one table.
///
/// The `region` column is always set to the source's logical name; any
/// region data inside the file is replaced.
#[derive(Debug, Clone)]
pub struct CsvExtractor {
    sources: Vec<SourceDescriptor>,
}

impl CsvExtractor {
    pub fn new(sources: Vec<SourceDescriptor>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[SourceDescriptor] {
        &self.sources
    }
}

impl Extractor for CsvExtractor {
    type Error = IngestError;

    fn extract(&self) -> Result<DataFrame> {
        if self.sources.is_empty() {
            return Err(IngestError::NoSources);
        }

        let mut frames = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            if !source.path.exists() {
                return Err(IngestError::SourceNotFound {
                    path: source.path.clone(),
                });
            }
            let table = read_source_table(&source.path)?;
            debug!(
                source = %source.name,
                path = %source.path.display(),
                rows = table.height(),
                "read source"
            );
            frames.push(source_frame(&table, &source.name)?);
        }

        let mut combined = stack_frames(frames)?;
        type_known_columns(&mut combined)?;
        Ok(combined)
    }
}

/// One source as text columns with `region` set to the source name.
///
/// The first occurrence wins when a file repeats a header.
fn source_frame(table: &SourceTable, region: &str) -> Result<DataFrame> {
    let height = table.height();
    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(table.headers.len() + 1);
    for (idx, header) in table.headers.iter().enumerate() {
        if !seen.insert(header.as_str()) {
            continue;
        }
        if header == REGION {
            columns.push(region_column(region, height));
        } else {
            let values: Vec<Option<&str>> = table
                .rows
                .iter()
                .map(|row| row.get(idx).and_then(Option::as_deref))
                .collect();
            columns.push(Series::new(header.as_str().into(), values).into_column());
        }
    }
    if !seen.contains(REGION) {
        columns.push(region_column(region, height));
    }
    Ok(DataFrame::new(columns)?)
}

fn region_column(region: &str, height: usize) -> Column {
    Series::new(REGION.into(), vec![region; height]).into_column()
}

/// Stacks frames over the union of their columns, in first-seen order.
///
/// Columns a source lacks are null for its rows.
fn stack_frames(frames: Vec<DataFrame>) -> Result<DataFrame> {
    let mut names: Vec<PlSmallStr> = Vec::new();
    for frame in &frames {
        for name in frame.get_column_names() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }

    let mut combined: Option<DataFrame> = None;
    for mut frame in frames {
        let height = frame.height();
        for name in &names {
            if frame.get_column_index(name).is_none() {
                frame.with_column(Series::full_null(name.clone(), height, &DataType::String))?;
            }
        }
        let frame = frame.select(names.iter().cloned())?;
        match combined.as_mut() {
            Some(existing) => {
                existing.vstack_mut(&frame)?;
            }
            None => combined = Some(frame),
        }
    }
    Ok(combined.unwrap_or_default())
}

/// Replaces the text `date` and `amount` columns with typed ones where possible.
fn type_known_columns(df: &mut DataFrame) -> Result<()> {
    for name in [DATE, AMOUNT] {
        let Ok(column) = df.column(name) else {
            continue;
        };
        let typed = typed_column(name, column.str()?)?;
        df.with_column(typed)?;
    }
    Ok(())
}

/// Types `date` as `Date` and `amount` as `Float64` when every value parses.
fn typed_column(name: &str, values: &StringChunked) -> Result<Column> {
    if name == DATE {
        let parsed: Option<Vec<Option<i32>>> = values
            .into_iter()
            .map(|value| match value {
                None => Some(None),
                Some(text) => parse_day_first_date(text).map(|date| Some(date_to_days(date))),
            })
            .collect();
        if let Some(days) = parsed {
            let series = Series::new(name.into(), days).cast(&DataType::Date)?;
            return Ok(series.into_column());
        }
    } else if name == AMOUNT {
        let parsed: Option<Vec<Option<f64>>> = values
            .into_iter()
            .map(|value| match value {
                None => Some(None),
                Some(text) => parse_locale_amount(text).map(Some),
            })
            .collect();
        if let Some(amounts) = parsed {
            return Ok(Series::new(name.into(), amounts).into_column());
        }
    }
    Ok(values.clone().into_column())
}
