//! Attendance classification.
//!
//! Pure functions over day records plus the holiday calendar and a
//! `today` date supplied by the caller. Nothing in this module reads
//! the clock or mutates anything, which keeps every rule testable with
//! a fixed date.

pub mod counts;
pub mod day_status;
pub mod late;
pub mod summary;
pub mod working_day;

pub use counts::{
    attendance_rate, late_count, on_time_count, present_days_count, working_days_count,
};
pub use day_status::{DayStatus, classify_day};
pub use late::{LATE_THRESHOLD, is_late};
pub use summary::{
    AttendanceSummary, PerformanceGrade, longest_absence_streak, month_working_days, summarize,
};
pub use working_day::{WEEKEND_CODES, has_passed, is_weekend, is_working_day};
