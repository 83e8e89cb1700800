use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static TIME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}").expect("valid time regex"));

/// Whether a cell starts with an `HH:MM` clock value.
pub fn starts_with_time(cell: &str) -> bool {
    TIME_PREFIX.is_match(cell.trim())
}

/// Extract the leading `HH:MM` of a cell, discarding anything glued after it.
///
/// - "07:30" -> Some("07:30")
/// - "07:30 SALA 2" -> Some("07:30")
/// - "Sala 07:30" -> None
pub fn extract_start_time(cell: &str) -> Option<String> {
    TIME_PREFIX
        .find(cell.trim())
        .map(|m| m.as_str().to_string())
}

/// Parse an `HH:MM` duration into total minutes.
///
/// - "01:30" -> Some(90)
/// - "00:00" -> Some(0)
/// - "", "abc", "25:00" -> None
pub fn parse_duration_minutes(s: &str) -> Option<u32> {
    let time = NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()?;
    Some(time.hour() * 60 + time.minute())
}
