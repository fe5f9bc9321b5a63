//! Timestamp parsing for the export's ISO-8601-like fields

use chrono::NaiveDateTime;

use crate::errors::ReadError;

/// Accepted layouts, tried in order
const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a timestamp column value
pub fn parse_timestamp(column: &str, value: &str) -> Result<NaiveDateTime, ReadError> {
    let trimmed = value.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ReadError::InvalidTimestamp {
            column: column.to_string(),
            value: value.to_string(),
        })
}
