//! Per-day status classification.

use serde::{Deserialize, Serialize};

use crate::classify::late::is_late;
use crate::classify::working_day::is_weekend;
use crate::models::{AttendanceRecord, HolidaySet};

/// The status shown for one day in calendars and detail views.
///
/// # Example
///
/// ```
/// use attendance_engine::classify::DayStatus;
///
/// assert_eq!(DayStatus::OnTime.to_string(), "On Time");
/// assert_eq!(serde_json::to_string(&DayStatus::OnTime).unwrap(), "\"on_time\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Configured holiday; no attendance required.
    Holiday,
    /// Weekend by printed day code; no attendance required.
    Weekend,
    /// Checked in after the late threshold.
    Late,
    /// Checked in at or before the late threshold.
    OnTime,
    /// Working day without a morning check-in.
    Absent,
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Holiday => write!(f, "Holiday"),
            DayStatus::Weekend => write!(f, "Weekend"),
            DayStatus::Late => write!(f, "Late"),
            DayStatus::OnTime => write!(f, "On Time"),
            DayStatus::Absent => write!(f, "Absent"),
        }
    }
}

/// Classifies one day record.
///
/// Precedence: holiday beats weekend beats the check-in, so a punch on a
/// holiday still shows as a holiday. Future days classify like any other
/// day; callers that care about day boundaries filter with
/// [`has_passed`](crate::classify::has_passed) first.
pub fn classify_day(record: &AttendanceRecord, holidays: &HolidaySet) -> DayStatus {
    let on_holiday = record
        .full_date
        .is_some_and(|date| holidays.contains(date));

    if on_holiday {
        DayStatus::Holiday
    } else if is_weekend(record) {
        DayStatus::Weekend
    } else if record.is_present() {
        if is_late(record) {
            DayStatus::Late
        } else {
            DayStatus::OnTime
        }
    } else {
        DayStatus::Absent
    }
}
