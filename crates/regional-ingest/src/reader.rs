//! Delimited-text reading.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use regional_model::columns::canonical_column_name;

use crate::error::{IngestError, Result};

/// Raw cells of one source file, headers already canonicalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    /// Row-major cells; empty cells are `None`.
    pub rows: Vec<Vec<Option<String>>>,
}

impl SourceTable {
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Reads a comma-delimited file with a header row.
///
/// Short rows are padded with `None`; a row wider than the header is a
/// [`IngestError::CsvParse`].
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_path(path)
        .map_err(|err| csv_error(path, &err))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| csv_error(path, &err))?
        .iter()
        .map(canonical_column_name)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| csv_error(path, &err))?;
        if record.len() > headers.len() {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(IngestError::CsvParse {
                path: path.to_path_buf(),
                message: format!(
                    "line {line}: expected {} fields, found {}",
                    headers.len(),
                    record.len()
                ),
            });
        }
        let row = (0..headers.len())
            .map(|idx| {
                record
                    .get(idx)
                    .filter(|value| !value.trim().is_empty())
                    .map(str::to_string)
            })
            .collect();
        rows.push(row);
    }

    Ok(SourceTable { headers, rows })
}

fn csv_error(path: &Path, err: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
