//! Report period parsing.
//!
//! The header's `Date:` token has the form `YY.MM.DD~YY.MM.DD`. Either
//! side may be missing or garbled; whatever parses is kept and the rest
//! stays unset, so one bad token never costs the employee block.

use chrono::NaiveDate;

/// The parsed halves of a `YY.MM.DD~YY.MM.DD` report period token.
///
/// `month` and `year` describe the reporting month and are taken from
/// the start side only; they survive an impossible start day (e.g.
/// `25.06.31`) because the month itself is still meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedDateRange {
    /// First day of the period, when the start side names a real date.
    pub start: Option<NaiveDate>,
    /// Last day of the period, when the end side names a real date.
    pub end: Option<NaiveDate>,
    /// Reporting month (1-12), from the start side.
    pub month: Option<u32>,
    /// Reporting year, from the start side.
    pub year: Option<i32>,
}

/// Parses a report period token.
///
/// Splits on `~` into exactly two sides; each side splits on `.` into
/// exactly three numeric parts, with the year read as `2000 + YY`.
/// Malformed input never fails, it just leaves fields unset.
///
/// # Example
///
/// ```
/// use attendance_engine::extract::parse_date_range;
/// use chrono::NaiveDate;
///
/// let range = parse_date_range("25.06.01~25.06.30");
/// assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 6, 1));
/// assert_eq!(range.end, NaiveDate::from_ymd_opt(2025, 6, 30));
/// assert_eq!(range.month, Some(6));
/// assert_eq!(range.year, Some(2025));
/// ```
pub fn parse_date_range(raw: &str) -> ParsedDateRange {
    let mut parsed = ParsedDateRange::default();
    let sides: Vec<&str> = raw.split('~').collect();
    if sides.len() != 2 {
        return parsed;
    }

    if let Some((year, month, day)) = parse_side(sides[0]) {
        parsed.start = NaiveDate::from_ymd_opt(year, month, day);
        if (1..=12).contains(&month) {
            parsed.month = Some(month);
            parsed.year = Some(year);
        }
    }
    if let Some((year, month, day)) = parse_side(sides[1]) {
        parsed.end = NaiveDate::from_ymd_opt(year, month, day);
    }
    parsed
}

/// One `YY.MM.DD` side as (year, month, day) numbers, unvalidated.
fn parse_side(side: &str) -> Option<(i32, u32, u32)> {
    let parts: Vec<&str> = side.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let yy: i32 = parts[0].trim().parse().ok()?;
    let month: u32 = parts[1].trim().parse().ok()?;
    let day: u32 = parts[2].trim().parse().ok()?;
    Some((2000 + yy, month, day))
}
