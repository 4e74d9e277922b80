//! Time utilities: parsing local timestamps with minute precision.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Accepts "YYYY-MM-DD HH:MM" and the HTML datetime-local form
/// "YYYY-MM-DDTHH:MM".
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}

pub fn parse_required_datetime(s: &str) -> AppResult<NaiveDateTime> {
    parse_datetime(s).ok_or_else(|| AppError::InvalidDateTime(s.to_string()))
}

pub fn format_datetime(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%d %H:%M").to_string()
}
