//! Aggregate counts and the attendance rate.
//!
//! Every count here excludes weekends, holidays, and days that have not
//! passed yet, so a freshly imported month (mostly future days with no
//! check-ins) never drags the rate down. As the month progresses the
//! denominators only grow.

use chrono::NaiveDate;

use crate::classify::late::is_late;
use crate::classify::working_day::{has_passed, is_working_day};
use crate::models::{AttendanceRecord, HolidaySet};

/// Number of working days that have passed.
pub fn working_days_count(
    records: &[AttendanceRecord],
    holidays: &HolidaySet,
    today: NaiveDate,
) -> usize {
    records
        .iter()
        .filter(|record| is_working_day(record, holidays) && has_passed(record, today))
        .count()
}

/// Number of passed working days with a morning check-in.
pub fn present_days_count(
    records: &[AttendanceRecord],
    holidays: &HolidaySet,
    today: NaiveDate,
) -> usize {
    records
        .iter()
        .filter(|record| {
            record.is_present() && is_working_day(record, holidays) && has_passed(record, today)
        })
        .count()
}

/// Number of present days with a late check-in.
pub fn late_count(records: &[AttendanceRecord], holidays: &HolidaySet, today: NaiveDate) -> usize {
    records
        .iter()
        .filter(|record| {
            record.is_present()
                && is_working_day(record, holidays)
                && has_passed(record, today)
                && is_late(record)
        })
        .count()
}

/// Number of present days with an on-time check-in.
pub fn on_time_count(
    records: &[AttendanceRecord],
    holidays: &HolidaySet,
    today: NaiveDate,
) -> usize {
    records
        .iter()
        .filter(|record| {
            record.is_present()
                && is_working_day(record, holidays)
                && has_passed(record, today)
                && !is_late(record)
        })
        .count()
}

/// Present days as a rounded percentage of working days.
///
/// Defined as 0 when there are no working days yet. Always within
/// 0 to 100 because present days are a subset of working days.
pub fn attendance_rate(
    records: &[AttendanceRecord],
    holidays: &HolidaySet,
    today: NaiveDate,
) -> u32 {
    let working = working_days_count(records, holidays, today);
    if working == 0 {
        return 0;
    }
    let present = present_days_count(records, holidays, today);
    ((present as f64 / working as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftPair;

    fn make_day(day: u32, day_of_week: &str, morning_in: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            date: format!("06.{day:02}"),
            full_date: NaiveDate::from_ymd_opt(2025, 6, day),
            day_of_week: day_of_week.to_string(),
            month: 6,
            year: 2025,
            morning: ShiftPair::new(morning_in.map(String::from), None),
            afternoon: ShiftPair::default(),
            evening: ShiftPair::default(),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // A week of June 2025: Mon 2nd .. Sun 8th, viewed from Mon the 9th.
    fn sample_week() -> Vec<AttendanceRecord> {
        vec![
            make_day(2, "MON", Some("06:40")),
            make_day(3, "TUE", Some("06:50")),
            make_day(4, "WED", None),
            make_day(5, "THU", Some("06:45")),
            make_day(6, "FRI", None),
            make_day(7, "SAT", Some("08:00")),
            make_day(8, "SUN", None),
        ]
    }

    // ==========================================================================
    // CT-001: Weekends are excluded from every count
    // ==========================================================================
    #[test]
    fn test_ct_001_weekends_excluded() {
        let records = sample_week();
        let holidays = HolidaySet::new();
        let today = date(2025, 6, 9);

        assert_eq!(working_days_count(&records, &holidays, today), 5);
        // The Saturday check-in does not count as a present day.
        assert_eq!(present_days_count(&records, &holidays, today), 3);
    }

    // ==========================================================================
    // CT-002: Holidays are excluded even with a check-in present
    // ==========================================================================
    #[test]
    fn test_ct_002_holiday_overrides_checkin() {
        let records = sample_week();
        let holidays: HolidaySet = [date(2025, 6, 2)].into_iter().collect();
        let today = date(2025, 6, 9);

        assert_eq!(working_days_count(&records, &holidays, today), 4);
        assert_eq!(present_days_count(&records, &holidays, today), 2);
    }

    // ==========================================================================
    // CT-003: Future days are excluded from every count
    // ==========================================================================
    #[test]
    fn test_ct_003_future_days_excluded() {
        let records = sample_week();
        let holidays = HolidaySet::new();
        let today = date(2025, 6, 3);

        assert_eq!(working_days_count(&records, &holidays, today), 2);
        assert_eq!(present_days_count(&records, &holidays, today), 2);
        assert_eq!(attendance_rate(&records, &holidays, today), 100);
    }

    // ==========================================================================
    // CT-004: Late and on-time partition the present days
    // ==========================================================================
    #[test]
    fn test_ct_004_late_on_time_partition() {
        let records = sample_week();
        let holidays = HolidaySet::new();
        let today = date(2025, 6, 9);

        let late = late_count(&records, &holidays, today);
        let on_time = on_time_count(&records, &holidays, today);
        assert_eq!(late, 1);
        assert_eq!(on_time, 2);
        assert_eq!(late + on_time, present_days_count(&records, &holidays, today));
    }

    // ==========================================================================
    // CT-005: Rate is rounded and guarded against empty months
    // ==========================================================================
    #[test]
    fn test_ct_005_rate_rounding_and_zero_guard() {
        let records = sample_week();
        let holidays = HolidaySet::new();

        // 3 of 5 working days present.
        assert_eq!(attendance_rate(&records, &holidays, date(2025, 6, 9)), 60);
        // Nothing has passed yet.
        assert_eq!(attendance_rate(&records, &holidays, date(2025, 5, 1)), 0);
        assert_eq!(attendance_rate(&[], &holidays, date(2025, 6, 9)), 0);
    }

    #[test]
    fn test_rate_rounds_to_nearest() {
        // 1 of 3 working days = 33.33 rounds to 33; 2 of 3 = 66.67 rounds to 67.
        let holidays = HolidaySet::new();
        let today = date(2025, 6, 9);
        let records = vec![
            make_day(2, "MON", Some("06:40")),
            make_day(3, "TUE", None),
            make_day(4, "WED", None),
        ];
        assert_eq!(attendance_rate(&records, &holidays, today), 33);

        let records = vec![
            make_day(2, "MON", Some("06:40")),
            make_day(3, "TUE", Some("06:40")),
            make_day(4, "WED", None),
        ];
        assert_eq!(attendance_rate(&records, &holidays, today), 67);
    }

    #[test]
    fn test_absent_day_counts_working_but_not_present() {
        let records = vec![make_day(4, "WED", None)];
        let holidays = HolidaySet::new();
        let today = date(2025, 6, 9);

        assert_eq!(working_days_count(&records, &holidays, today), 1);
        assert_eq!(present_days_count(&records, &holidays, today), 0);
    }
}
