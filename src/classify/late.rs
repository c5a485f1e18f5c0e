//! Late-arrival detection.

use crate::models::AttendanceRecord;

/// Morning check-in cutoff. Arrivals strictly after this are late.
pub const LATE_THRESHOLD: &str = "06:45";

/// Returns true when the morning check-in is strictly after the cutoff.
///
/// Times compare as strings, which is valid because terminal exports
/// print zero-padded 24-hour `HH:MM` values. A day without a morning
/// check-in is never late (it is absent, not late).
///
/// # Example
///
/// ```
/// use attendance_engine::classify::{LATE_THRESHOLD, is_late};
/// use attendance_engine::models::{AttendanceRecord, ShiftPair};
///
/// let mut record = AttendanceRecord {
///     date: "06.02".to_string(),
///     full_date: None,
///     day_of_week: "MON".to_string(),
///     month: 6,
///     year: 2025,
///     morning: ShiftPair::new(Some("06:46".to_string()), None),
///     afternoon: ShiftPair::default(),
///     evening: ShiftPair::default(),
/// };
/// assert!(is_late(&record));
///
/// record.morning.time_in = Some(LATE_THRESHOLD.to_string());
/// assert!(!is_late(&record));
/// ```
pub fn is_late(record: &AttendanceRecord) -> bool {
    record
        .morning
        .time_in
        .as_deref()
        .is_some_and(|time_in| time_in > LATE_THRESHOLD)
}
