//! Time cell parsing.
//!
//! Terminal exports print check-in/check-out times as `HH:MM` strings,
//! sometimes with trailing markers (an asterisk for manually corrected
//! punches). Anything else in a time column is treated as no punch.

use std::sync::OnceLock;

use regex::Regex;

static TIME_PREFIX: OnceLock<Regex> = OnceLock::new();

fn time_prefix() -> &'static Regex {
    TIME_PREFIX.get_or_init(|| Regex::new(r"^(\d{1,2}:\d{2})").expect("valid time pattern"))
}

/// Extracts the leading `HH:MM` time from a raw cell value.
///
/// Returns the matched time substring only, discarding any trailing
/// characters. Empty, blank, and malformed cells all produce `None`;
/// a time column never fails extraction.
///
/// # Example
///
/// ```
/// use attendance_engine::extract::parse_time_cell;
///
/// assert_eq!(parse_time_cell("06:40"), Some("06:40".to_string()));
/// assert_eq!(parse_time_cell("06:40*"), Some("06:40".to_string()));
/// assert_eq!(parse_time_cell(""), None);
/// assert_eq!(parse_time_cell("ABSENT"), None);
/// ```
pub fn parse_time_cell(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    time_prefix()
        .captures(trimmed)
        .map(|caps| caps[1].to_string())
}
