//! Working-day and day-boundary predicates.

use chrono::NaiveDate;

use crate::models::{AttendanceRecord, HolidaySet};

/// Weekday codes treated as weekend days.
///
/// Matched exactly against the printed code; classification trusts the
/// source sheet rather than recomputing the weekday (see
/// [`verify_day_codes`](crate::extract::verify_day_codes) for the
/// optional cross-check).
pub const WEEKEND_CODES: [&str; 2] = ["SAT", "SUN"];

/// Returns true when the record's printed day code is a weekend code.
pub fn is_weekend(record: &AttendanceRecord) -> bool {
    WEEKEND_CODES.contains(&record.day_of_week.as_str())
}

/// Returns true when the record falls on a working day.
///
/// A working day is neither a weekend (by printed day code) nor a
/// configured holiday (by calendar date). Records without a resolvable
/// date never count as holidays.
pub fn is_working_day(record: &AttendanceRecord, holidays: &HolidaySet) -> bool {
    !is_weekend(record)
        && !record
            .full_date
            .is_some_and(|date| holidays.contains(date))
}

/// Returns true when the record's day is today or earlier.
///
/// Day boundaries are inclusive of today, so a check-in this morning
/// already counts. Records without a resolvable date never pass.
pub fn has_passed(record: &AttendanceRecord, today: NaiveDate) -> bool {
    record.full_date.is_some_and(|date| date <= today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftPair;

    fn make_record(day_of_week: &str, full_date: Option<NaiveDate>) -> AttendanceRecord {
        AttendanceRecord {
            date: "06.02".to_string(),
            full_date,
            day_of_week: day_of_week.to_string(),
            month: 6,
            year: 2025,
            morning: ShiftPair::default(),
            afternoon: ShiftPair::default(),
            evening: ShiftPair::default(),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // ==========================================================================
    // WD-001: Weekend codes are matched exactly
    // ==========================================================================
    #[test]
    fn test_wd_001_weekend_codes() {
        assert!(is_weekend(&make_record("SAT", None)));
        assert!(is_weekend(&make_record("SUN", None)));
        assert!(!is_weekend(&make_record("MON", None)));
        // The printed code is trusted verbatim, casing included.
        assert!(!is_weekend(&make_record("Sat", None)));
    }

    // ==========================================================================
    // WD-002: Weekdays off the holiday calendar are working days
    // ==========================================================================
    #[test]
    fn test_wd_002_plain_weekday_is_working() {
        let record = make_record("MON", Some(date(2025, 6, 2)));
        assert!(is_working_day(&record, &HolidaySet::new()));
    }

    // ==========================================================================
    // WD-003: Holidays are not working days
    // ==========================================================================
    #[test]
    fn test_wd_003_holiday_is_not_working() {
        let holidays: HolidaySet = [date(2025, 6, 2)].into_iter().collect();
        let record = make_record("MON", Some(date(2025, 6, 2)));
        assert!(!is_working_day(&record, &holidays));
    }

    // ==========================================================================
    // WD-004: Undated records never match a holiday
    // ==========================================================================
    #[test]
    fn test_wd_004_undated_record_is_not_holiday() {
        let holidays: HolidaySet = [date(2025, 6, 2)].into_iter().collect();
        let record = make_record("MON", None);
        assert!(is_working_day(&record, &holidays));
    }

    // ==========================================================================
    // WD-005: Day boundary is inclusive of today
    // ==========================================================================
    #[test]
    fn test_wd_005_has_passed_inclusive() {
        let today = date(2025, 6, 15);
        assert!(has_passed(&make_record("MON", Some(date(2025, 6, 14))), today));
        assert!(has_passed(&make_record("MON", Some(date(2025, 6, 15))), today));
        assert!(!has_passed(&make_record("MON", Some(date(2025, 6, 16))), today));
    }

    #[test]
    fn test_undated_record_never_passes() {
        assert!(!has_passed(&make_record("MON", None), date(2025, 6, 15)));
    }

    #[test]
    fn test_weekend_on_holiday_is_still_not_working() {
        let holidays: HolidaySet = [date(2025, 6, 7)].into_iter().collect();
        let record = make_record("SAT", Some(date(2025, 6, 7)));
        assert!(!is_working_day(&record, &holidays));
    }
}
