use crate::types::errors::TimestampError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serializer;

/// Canonical rendering of a transaction timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ACCEPTED_FORMATS: [&str; 3] = [
    TIMESTAMP_FORMAT,
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M"
];

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let value = value.trim();

    for format in ACCEPTED_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(timestamp);
        }
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| TimestampError::UnrecognizedFormat(value.to_string()))
}

pub fn serialize_timestamp<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
}
