//! Day-record model and related types.
//!
//! This module defines the AttendanceRecord struct and ShiftPair type
//! for representing one calendar day of terminal check-in data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single in/out pair for one shift slot (morning, afternoon, or evening).
///
/// Each side is a zero-padded `HH:MM` 24-hour string, or `None` when the
/// terminal recorded nothing for that slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPair {
    /// Check-in time for the slot.
    pub time_in: Option<String>,
    /// Check-out time for the slot.
    pub time_out: Option<String>,
}

impl ShiftPair {
    /// Creates a shift pair from already-parsed time cells.
    pub fn new(time_in: Option<String>, time_out: Option<String>) -> Self {
        Self { time_in, time_out }
    }
}

/// One calendar day of attendance data for one employee.
///
/// The `date` token and `day_of_week` code are carried verbatim from the
/// source sheet; `full_date` is assembled from the header-derived year and
/// the `MM.DD` token, and is `None` when the token does not name a real
/// calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The `MM.DD` date token as printed in the source sheet.
    pub date: String,
    /// The assembled calendar date, if the token was valid.
    pub full_date: Option<NaiveDate>,
    /// Three-letter weekday code as printed in the source (e.g. "MON").
    pub day_of_week: String,
    /// Month number (1-12), taken from the date token.
    pub month: u32,
    /// Four-digit year, derived from the employee header.
    pub year: i32,
    /// Morning check-in/check-out pair.
    pub morning: ShiftPair,
    /// Afternoon check-in/check-out pair.
    pub afternoon: ShiftPair,
    /// Evening check-in/check-out pair.
    pub evening: ShiftPair,
}

impl AttendanceRecord {
    /// Returns true if the employee checked in that morning.
    ///
    /// A day counts as present exactly when the morning check-in is set;
    /// afternoon and evening punches do not affect presence.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{AttendanceRecord, ShiftPair};
    /// use chrono::NaiveDate;
    ///
    /// let record = AttendanceRecord {
    ///     date: "06.02".to_string(),
    ///     full_date: NaiveDate::from_ymd_opt(2025, 6, 2),
    ///     day_of_week: "MON".to_string(),
    ///     month: 6,
    ///     year: 2025,
    ///     morning: ShiftPair::new(Some("06:40".to_string()), None),
    ///     afternoon: ShiftPair::default(),
    ///     evening: ShiftPair::default(),
    /// };
    /// assert!(record.is_present());
    /// ```
    pub fn is_present(&self) -> bool {
        self.morning.time_in.is_some()
    }

    /// The deduplication key used by the merge engine.
    ///
    /// Two records describe the same day exactly when their
    /// (date token, month, year) triples are equal.
    pub fn day_key(&self) -> (&str, u32, i32) {
        (self.date.as_str(), self.month, self.year)
    }

    /// The `YYYY-MM` month key this record belongs to.
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}
