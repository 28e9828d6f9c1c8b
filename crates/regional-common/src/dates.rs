//! Calendar helpers.
//!
//! Polars stores `Date` values as `i32` days since 1970-01-01; these helpers
//! move between that representation and `chrono::NaiveDate`.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Days between 0001-01-01 (day 1 of the common era) and 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

const DAY_FIRST_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y"];

/// Two-digit years map to 1970-2069.
const DAY_FIRST_SHORT_YEAR_FORMATS: &[&str] = &["%d/%m/%y", "%d-%m-%y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Converts a date to polars' epoch-day representation.
///
/// ```
/// use chrono::NaiveDate;
/// use regional_common::date_to_days;
///
/// let date = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
/// assert_eq!(date_to_days(date), 1);
/// ```
pub fn date_to_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

/// Converts polars' epoch-day representation back to a date.
pub fn days_to_date(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

/// Parses a day-first date such as `05/01/2024`, `05-01-2024` or `05/01/24`.
///
/// The year must have two or four digits.
pub fn parse_day_first_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let year_digits = trimmed.rsplit(['/', '-']).next().map_or(0, str::len);
    let formats = match year_digits {
        2 => DAY_FIRST_SHORT_YEAR_FORMATS,
        4 => DAY_FIRST_FORMATS,
        _ => return None,
    };
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Parses a date from ISO (`2024-01-05`), ISO date-time or day-first text.
///
/// Date-times are truncated to their calendar date.
pub fn parse_date_flexible(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if starts_with_full_year(trimmed) {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Some(date);
        }
        if let Some(datetime) = DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        {
            return Some(datetime.date());
        }
    }
    parse_day_first_date(trimmed)
}

/// `YYYY-` prefix; chrono's `%Y` alone also accepts shorter years.
fn starts_with_full_year(value: &str) -> bool {
    match value.as_bytes().get(..5) {
        Some([digits @ .., b'-']) => digits.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

/// Calendar quarter (1-4) of a month number.
pub fn quarter_of(month: u32) -> u32 {
    (month.saturating_sub(1)) / 3 + 1
}
