//! Attendance table extraction.
//!
//! Three rows below each header block sits a fixed-column grid of day
//! rows: a `MM.DD` date token, the printed weekday code, then in/out
//! cells for the morning, afternoon, and evening shifts. Wide sheets
//! print a second, independent day block starting at column 8.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;
use tracing::warn;

use crate::extract::time_cell::parse_time_cell;
use crate::models::{AttendanceRecord, ShiftPair};

/// Maximum number of rows scanned below a header block.
pub const SCAN_LIMIT: usize = 50;

/// Year assumed for day rows when the header has no parsable report period.
pub const DEFAULT_SHEET_YEAR: i32 = 2025;

/// Column offset of the right-hand day block on wide sheets.
const RIGHT_BLOCK_COLUMN: usize = 8;

static DATE_TOKEN: OnceLock<Regex> = OnceLock::new();

fn date_token() -> &'static Regex {
    DATE_TOKEN.get_or_init(|| Regex::new(r"^\d{2}\.\d{2}$").expect("valid date token pattern"))
}

/// Extracts the day rows of one employee's attendance table.
///
/// Scans forward from `start_row`, at most [`SCAN_LIMIT`] rows, stopping
/// early when a row's joined text contains `Name:` or `Dept:` (the next
/// employee block). A row is a day row when column 0 is an `MM.DD` token;
/// rows that are not (separators, totals, blanks) are skipped silently.
/// When a day row carries a second date token at column 8, the right-hand
/// block is read the same way and appended after the left-hand record.
///
/// Records come back in source row order, left before right, which is not
/// necessarily date order.
pub fn extract_attendance_table(
    grid: &[Vec<String>],
    start_row: usize,
    year: Option<i32>,
) -> Vec<AttendanceRecord> {
    let year = year.unwrap_or(DEFAULT_SHEET_YEAR);
    let mut records = Vec::new();

    let end = grid.len().min(start_row.saturating_add(SCAN_LIMIT));
    for row in grid.iter().take(end).skip(start_row) {
        if row.is_empty() {
            continue;
        }
        let row_text = row.join(" ");
        if row_text.contains("Name:") || row_text.contains("Dept:") {
            break;
        }

        let Some(left) = read_day_block(row, 0, year) else {
            continue;
        };
        records.push(left);
        if let Some(right) = read_day_block(row, RIGHT_BLOCK_COLUMN, year) {
            records.push(right);
        }
    }

    records
}

/// Reads one 8-column day block starting at `base`, if the date token matches.
fn read_day_block(row: &[String], base: usize, year: i32) -> Option<AttendanceRecord> {
    let cell = |offset: usize| row.get(base + offset).map(String::as_str).unwrap_or("");

    let token = cell(0);
    if !date_token().is_match(token) {
        return None;
    }
    let mut parts = token.split('.');
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;

    Some(AttendanceRecord {
        date: token.to_string(),
        full_date: NaiveDate::from_ymd_opt(year, month, day),
        day_of_week: cell(1).to_string(),
        month,
        year,
        morning: ShiftPair::new(parse_time_cell(cell(2)), parse_time_cell(cell(3))),
        afternoon: ShiftPair::new(parse_time_cell(cell(4)), parse_time_cell(cell(5))),
        evening: ShiftPair::new(parse_time_cell(cell(6)), parse_time_cell(cell(7))),
    })
}

/// Cross-checks printed weekday codes against the calendar.
///
/// Classification trusts the code as printed; this check exists for
/// imports where the terminal's labels are suspect. Every dated record
/// whose printed code disagrees with the computed weekday is logged at
/// warn level. Returns the number of mismatches found.
pub fn verify_day_codes(employee: &str, records: &[AttendanceRecord]) -> usize {
    let mut mismatches = 0;
    for record in records {
        let Some(full_date) = record.full_date else {
            continue;
        };
        let expected = weekday_code(full_date.weekday());
        if !record.day_of_week.eq_ignore_ascii_case(expected) {
            warn!(
                employee,
                date = %full_date,
                printed = %record.day_of_week,
                expected,
                "printed day code disagrees with calendar"
            );
            mismatches += 1;
        }
    }
    mismatches
}

fn weekday_code(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}
