//! Text helpers for raw regional exports.

/// Parses an amount written with `.` as thousands separator and `,` as the
/// decimal separator, e.g. `1.234,50`.
///
/// ```
/// use regional_common::parse_locale_amount;
///
/// assert_eq!(parse_locale_amount("1.234,50"), Some(1234.5));
/// assert_eq!(parse_locale_amount("1000"), Some(1000.0));
/// assert_eq!(parse_locale_amount(""), None);
/// ```
pub fn parse_locale_amount(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized: String = trimmed
        .chars()
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized.parse::<f64>().ok()
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
///
/// ```
/// use regional_common::title_case;
///
/// assert_eq!(title_case("north east"), "North East");
/// assert_eq!(title_case("SOUTH"), "South");
/// ```
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
