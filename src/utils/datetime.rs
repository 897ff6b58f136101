//! Date and time parsing for occurrence fields and report filters.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};

/// Normalized `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> AppResult<String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Normalized `HH:MM`; seconds are accepted and dropped.
pub fn parse_time(s: &str) -> AppResult<String> {
    let t = s.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| parse_date(s)).transpose()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| parse_time(s)).transpose()
}
