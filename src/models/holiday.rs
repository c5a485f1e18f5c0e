//! Holiday calendar model.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The set of configured public holidays.
///
/// Membership is keyed on calendar dates, so an entry can only ever be a
/// real date; there is no string key to get out of sync with. The set
/// serializes as a sorted array of ISO-8601 date strings and is replaced
/// wholesale on save.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let mut holidays = HolidaySet::new();
/// let martyrs_day = NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
///
/// holidays.add(martyrs_day);
/// assert!(holidays.contains(martyrs_day));
///
/// holidays.toggle(martyrs_day);
/// assert!(!holidays.contains(martyrs_day));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday. Returns false if the date was already present.
    pub fn add(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Removes a holiday. Returns false if the date was not present.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.dates.remove(&date)
    }

    /// Flips the given date in or out of the set.
    ///
    /// Returns true when the date is a holiday after the call.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.dates.remove(&date) {
            false
        } else {
            self.dates.insert(date);
            true
        }
    }

    /// Returns true if the given date is a configured holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// The holidays falling within the given month, in ascending order.
    pub fn for_month(&self, year: i32, month: u32) -> Vec<NaiveDate> {
        self.dates
            .iter()
            .filter(|date| date.year() == year && date.month() == month)
            .copied()
            .collect()
    }

    /// Iterates over all holidays in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Number of configured holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true when no holidays are configured.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_add_and_contains() {
        let mut holidays = HolidaySet::new();
        assert!(holidays.add(date(2025, 7, 19)));
        assert!(!holidays.add(date(2025, 7, 19)));
        assert!(holidays.contains(date(2025, 7, 19)));
        assert!(!holidays.contains(date(2025, 7, 20)));
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut holidays = HolidaySet::new();
        assert!(holidays.toggle(date(2025, 1, 4)));
        assert!(holidays.contains(date(2025, 1, 4)));
        assert!(!holidays.toggle(date(2025, 1, 4)));
        assert!(holidays.is_empty());
    }

    #[test]
    fn test_for_month_filters_and_sorts() {
        let holidays: HolidaySet = [
            date(2025, 7, 19),
            date(2025, 6, 30),
            date(2025, 7, 1),
            date(2026, 7, 10),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            holidays.for_month(2025, 7),
            vec![date(2025, 7, 1), date(2025, 7, 19)]
        );
        assert!(holidays.for_month(2025, 2).is_empty());
    }

    #[test]
    fn test_serializes_as_sorted_iso_dates() {
        let holidays: HolidaySet = [date(2025, 7, 19), date(2025, 1, 4)].into_iter().collect();
        let json = serde_json::to_string(&holidays).unwrap();
        assert_eq!(json, r#"["2025-01-04","2025-07-19"]"#);
    }

    #[test]
    fn test_deserializes_from_date_string_array() {
        let holidays: HolidaySet = serde_json::from_str(r#"["2025-01-04","2025-07-19"]"#).unwrap();
        assert_eq!(holidays.len(), 2);
        assert!(holidays.contains(date(2025, 1, 4)));
    }
}
