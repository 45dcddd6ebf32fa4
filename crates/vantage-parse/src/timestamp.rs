//! Row timestamp normalization.
//!
//! Daily and longer series key their rows by date (`2024-01-02`), intraday
//! series by minute (`2024-01-02 09:30`) or second. Every key is padded to
//! the full second form before parsing so all points share one type.

use std::borrow::Cow;

use chrono::NaiveDateTime;

use crate::ParseError;

/// Format every normalized timestamp is parsed with.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATE_LEN: usize = "2024-01-02".len();
const MINUTE_LEN: usize = "2024-01-02 09:30".len();

/// Pads a date or minute timestamp to second precision.
///
/// Length is counted in characters. Keys of any other length are returned
/// unchanged.
///
/// # Example
///
/// ```
/// use vantage_parse::normalize_timestamp;
///
/// assert_eq!(normalize_timestamp("2024-01-02"), "2024-01-02 00:00:00");
/// assert_eq!(normalize_timestamp("2024-01-02 09:30"), "2024-01-02 09:30:00");
/// assert_eq!(normalize_timestamp("2024-01-02 09:30:15"), "2024-01-02 09:30:15");
/// ```
#[must_use]
pub fn normalize_timestamp(raw: &str) -> Cow<'_, str> {
    match raw.chars().count() {
        DATE_LEN => Cow::Owned(format!("{raw} 00:00:00")),
        MINUTE_LEN => Cow::Owned(format!("{raw}:00")),
        _ => Cow::Borrowed(raw),
    }
}

/// Normalizes and parses a row key.
///
/// # Errors
///
/// Returns [`ParseError::InvalidTimestamp`] if the normalized key does not
/// match [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(&normalize_timestamp(raw), TIMESTAMP_FORMAT).map_err(|source| {
        ParseError::InvalidTimestamp {
            value: raw.to_string(),
            source,
        }
    })
}
