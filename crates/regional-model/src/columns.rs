//! Canonical column names.

/// Transaction date, polars `Date`.
pub const DATE: &str = "date";
/// Transaction amount, `Float64`.
pub const AMOUNT: &str = "amount";
/// Region label, taken from the source's logical name.
pub const REGION: &str = "region";

pub const YEAR: &str = "year";
pub const MONTH: &str = "month";
pub const QUARTER: &str = "quarter";
pub const PERIOD: &str = "period";

pub const TOTAL_AMOUNT: &str = "total_amount";
pub const AVERAGE_AMOUNT: &str = "average_amount";
pub const OBSERVATION_COUNT: &str = "observation_count";

/// Columns that must be present and non-null for a record to be kept.
pub const CRITICAL_COLUMNS: [&str; 3] = [DATE, AMOUNT, REGION];

/// Output columns of the monthly aggregate, in order.
pub const AGGREGATE_COLUMNS: [&str; 8] = [
    REGION,
    PERIOD,
    YEAR,
    MONTH,
    QUARTER,
    TOTAL_AMOUNT,
    AVERAGE_AMOUNT,
    OBSERVATION_COUNT,
];

/// Amount header used by the regional exports.
pub const SOURCE_AMOUNT_HEADER: &str = "Compraventas, Venta regional, monto";
/// Date header used by the regional exports.
pub const SOURCE_DATE_HEADER: &str = "Fecha";

/// Maps a raw source header to its canonical column name.
///
/// Strips a UTF-8 byte order mark and surrounding whitespace; unknown headers
/// pass through unchanged.
pub fn canonical_column_name(raw: &str) -> String {
    let header = raw.trim_matches('\u{feff}').trim();
    match header {
        SOURCE_AMOUNT_HEADER => AMOUNT.to_string(),
        SOURCE_DATE_HEADER => DATE.to_string(),
        other => other.to_string(),
    }
}
