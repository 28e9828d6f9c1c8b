//! Shared utilities for the regional sales crates.
//!
//! Polars `AnyValue` helpers, calendar conversions between `chrono` dates and
//! the epoch-day representation polars uses for `Date` columns, and the
//! locale-aware parsers for the raw regional exports.

pub mod dates;
pub mod polars;
pub mod text;

pub use dates::{
    date_to_days, days_to_date, parse_date_flexible, parse_day_first_date, quarter_of,
};
pub use self::polars::{any_to_f64, any_to_string, format_numeric, is_numeric_dtype, parse_f64};
pub use text::{parse_locale_amount, title_case};
