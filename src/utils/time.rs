//! Timestamp utilities: the stored `last_updated` format, parsing and "now".

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime, Timelike};

/// Format of `tablets.last_updated`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Drop sub-second precision.
pub fn truncate_to_seconds(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}

/// Current local time at second precision.
pub fn now() -> NaiveDateTime {
    truncate_to_seconds(Local::now().naive_local())
}

/// `--at` override, or the current time.
pub fn reference_time(at: Option<&String>) -> AppResult<NaiveDateTime> {
    match at {
        Some(s) => parse_timestamp(s),
        None => Ok(now()),
    }
}
