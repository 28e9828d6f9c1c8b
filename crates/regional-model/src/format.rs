//! Output format tags.

use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Serialization format of the final aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Comma-delimited text with a header row.
    DelimitedText,
    /// Apache Parquet.
    ColumnarBinary,
}

impl OutputFormat {
    /// Resolves a format tag, case-insensitively.
    ///
    /// Accepts `csv` / `delimited-text` and `parquet` / `columnar-binary`.
    pub fn parse(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "csv" | "delimited-text" => Ok(Self::DelimitedText),
            "parquet" | "columnar-binary" => Ok(Self::ColumnarBinary),
            _ => Err(ModelError::UnsupportedFormat {
                format: tag.to_string(),
            }),
        }
    }

    /// Short tag used on the command line and in config files.
    pub fn tag(self) -> &'static str {
        match self {
            Self::DelimitedText => "csv",
            Self::ColumnarBinary => "parquet",
        }
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        self.tag()
    }
}

impl FromStr for OutputFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!(OutputFormat::parse("csv").unwrap(), OutputFormat::DelimitedText);
        assert_eq!(OutputFormat::parse("CSV").unwrap(), OutputFormat::DelimitedText);
        assert_eq!(
            OutputFormat::parse("Delimited-Text").unwrap(),
            OutputFormat::DelimitedText
        );
        assert_eq!(
            OutputFormat::parse("PARQUET").unwrap(),
            OutputFormat::ColumnarBinary
        );
        assert_eq!(
            "columnar-binary".parse::<OutputFormat>().unwrap(),
            OutputFormat::ColumnarBinary
        );
    }

    #[test]
    fn rejects_unknown_tags() {
        let err = OutputFormat::parse("xml").unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedFormat { format } if format == "xml"));
        assert!(OutputFormat::parse("").is_err());
    }

    #[test]
    fn extension_matches_tag() {
        assert_eq!(OutputFormat::DelimitedText.extension(), "csv");
        assert_eq!(OutputFormat::ColumnarBinary.to_string(), "parquet");
    }
}
