//! Per-employee summary statistics.
//!
//! Bundles the aggregate counts into the summary shown on dashboards
//! and reports: rates, a performance grade, and the longest run of
//! consecutive absences.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::classify::counts::{
    attendance_rate, late_count, on_time_count, present_days_count, working_days_count,
};
use crate::classify::working_day::{has_passed, is_working_day};
use crate::models::{AttendanceRecord, HolidaySet};

/// Attendance-rate bands used for grading.
///
/// # Example
///
/// ```
/// use attendance_engine::classify::PerformanceGrade;
///
/// assert_eq!(PerformanceGrade::from_rate(95), PerformanceGrade::Excellent);
/// assert_eq!(PerformanceGrade::from_rate(94), PerformanceGrade::Good);
/// assert_eq!(PerformanceGrade::from_rate(74), PerformanceGrade::NeedsImprovement);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceGrade {
    /// Attendance rate of 95% or better.
    Excellent,
    /// Attendance rate of 85% to 94%.
    Good,
    /// Attendance rate of 75% to 84%.
    Average,
    /// Attendance rate below 75%.
    NeedsImprovement,
}

impl PerformanceGrade {
    /// Grades an attendance rate.
    pub fn from_rate(rate: u32) -> Self {
        if rate >= 95 {
            Self::Excellent
        } else if rate >= 85 {
            Self::Good
        } else if rate >= 75 {
            Self::Average
        } else {
            Self::NeedsImprovement
        }
    }
}

impl std::fmt::Display for PerformanceGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerformanceGrade::Excellent => write!(f, "Excellent"),
            PerformanceGrade::Good => write!(f, "Good"),
            PerformanceGrade::Average => write!(f, "Average"),
            PerformanceGrade::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// Aggregate statistics for one employee over a set of day records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Working days that have passed.
    pub working_days: usize,
    /// Passed working days with a morning check-in.
    pub present_days: usize,
    /// Passed working days without a morning check-in.
    pub absent_days: usize,
    /// Present days after the late threshold.
    pub late_days: usize,
    /// Present days at or before the late threshold.
    pub on_time_days: usize,
    /// Present days as a rounded percentage of working days.
    pub attendance_rate: u32,
    /// On-time days as a rounded percentage of present days.
    pub punctuality_rate: u32,
    /// Grade band for the attendance rate.
    pub grade: PerformanceGrade,
    /// Longest run of consecutive absent working days.
    pub longest_absence_streak: usize,
}

/// Summarizes one employee's day records.
///
/// All counts respect the working-day and day-boundary rules; both rates
/// fall back to 0 when their denominator is empty.
pub fn summarize(
    records: &[AttendanceRecord],
    holidays: &HolidaySet,
    today: NaiveDate,
) -> AttendanceSummary {
    let working_days = working_days_count(records, holidays, today);
    let present_days = present_days_count(records, holidays, today);
    let late_days = late_count(records, holidays, today);
    let rate = attendance_rate(records, holidays, today);

    let punctuality_rate = if present_days > 0 {
        (((present_days - late_days) as f64 / present_days as f64) * 100.0).round() as u32
    } else {
        0
    };

    AttendanceSummary {
        working_days,
        present_days,
        absent_days: working_days - present_days,
        late_days,
        on_time_days: on_time_count(records, holidays, today),
        attendance_rate: rate,
        punctuality_rate,
        grade: PerformanceGrade::from_rate(rate),
        longest_absence_streak: longest_absence_streak(records, holidays, today),
    }
}

/// Longest run of consecutive absent working days.
///
/// Weekends and holidays break a streak rather than extending it; days
/// that have not passed are ignored. Records are taken in the order
/// given, which is date order after a merge.
pub fn longest_absence_streak(
    records: &[AttendanceRecord],
    holidays: &HolidaySet,
    today: NaiveDate,
) -> usize {
    let mut current = 0;
    let mut longest = 0;
    for record in records {
        if !is_working_day(record, holidays) {
            current = 0;
            continue;
        }
        if !has_passed(record, today) {
            continue;
        }
        if record.is_present() {
            current = 0;
        } else {
            current += 1;
            longest = longest.max(current);
        }
    }
    longest
}

/// Working days in a calendar month that have passed.
///
/// Unlike the record-based counts, this walks the calendar itself with
/// the weekday computed from each date, so it is independent of what any
/// sheet happened to contain. Used for month-level denominators in
/// reports.
pub fn month_working_days(
    year: i32,
    month: u32,
    holidays: &HolidaySet,
    today: NaiveDate,
) -> usize {
    let mut count = 0;
    let mut day = 1;
    while let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        if !weekend && !holidays.contains(date) && date <= today {
            count += 1;
        }
        day += 1;
    }
    count
}
