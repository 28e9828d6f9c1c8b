//! Error types for transform steps.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised by a transform step. The first one aborts the run.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Required columns are absent.
    #[error("missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A value could not be converted to the column's target type.
    #[error("cannot convert {column} value '{value}' at row {row} to {expected}")]
    TypeCoercion {
        column: String,
        row: usize,
        value: String,
        expected: &'static str,
    },

    /// A data-quality rule was violated.
    #[error("data validation failed: {0}")]
    DataValidation(String),

    /// Failed DataFrame operation.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformError::MissingColumns {
            columns: vec!["date".to_string(), "region".to_string()],
        };
        assert_eq!(err.to_string(), "missing required columns: date, region");

        let err = TransformError::TypeCoercion {
            column: "amount".to_string(),
            row: 3,
            value: "abc".to_string(),
            expected: "a number",
        };
        assert_eq!(
            err.to_string(),
            "cannot convert amount value 'abc' at row 3 to a number"
        );

        let err = TransformError::DataValidation("table is empty".to_string());
        assert_eq!(err.to_string(), "data validation failed: table is empty");
    }
}
