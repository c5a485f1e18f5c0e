//! Employee model and related types.
//!
//! This module defines the EmployeeRecord struct produced by the sheet
//! extractor and maintained by the merge engine, along with the report
//! period parsed from the sheet header.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::attendance::AttendanceRecord;

/// The reporting period printed in a sheet header's `Date:` field.
///
/// Either side is `None` when the corresponding half of the
/// `YY.MM.DD~YY.MM.DD` token was missing or malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRange {
    /// First day of the reporting period.
    pub start: Option<NaiveDate>,
    /// Last day of the reporting period.
    pub end: Option<NaiveDate>,
}

impl ReportRange {
    /// Returns true when neither side of the range was parsed.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// One employee's extracted header fields plus their attendance history.
///
/// Identity for merging purposes is the (name, employee_id) pair, with the
/// name compared case-insensitively and the id compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Normalized display name (whitespace-collapsed, duplicate words removed).
    pub name: String,
    /// Terminal-assigned employee id, verbatim from the header.
    pub employee_id: String,
    /// Department text from the header; may be empty.
    pub department: String,
    /// Reporting period from the header's `Date:` field.
    pub report_range: ReportRange,
    /// Month of the reporting period start, when known.
    pub month: Option<u32>,
    /// Year of the reporting period start, when known.
    pub year: Option<i32>,
    /// Name of the worksheet this employee block was found on.
    pub source_sheet: String,
    /// 1-based row number of the header row within the worksheet.
    pub source_row: usize,
    /// Per-day attendance records, ascending by date after a merge.
    pub attendance: Vec<AttendanceRecord>,
}

impl EmployeeRecord {
    /// Returns true when this record describes the given employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{EmployeeRecord, ReportRange};
    ///
    /// let employee = EmployeeRecord {
    ///     name: "Aye Chan".to_string(),
    ///     employee_id: "33".to_string(),
    ///     department: "Discipline".to_string(),
    ///     report_range: ReportRange::default(),
    ///     month: Some(6),
    ///     year: Some(2025),
    ///     source_sheet: "Sheet1".to_string(),
    ///     source_row: 1,
    ///     attendance: Vec::new(),
    /// };
    /// assert!(employee.matches("AYE CHAN", "33"));
    /// assert!(!employee.matches("Aye Chan", "34"));
    /// ```
    pub fn matches(&self, name: &str, employee_id: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase() && self.employee_id == employee_id
    }

    /// Sorts the attendance history ascending by calendar date.
    ///
    /// Records without a resolvable date keep their relative order and sort
    /// after every dated record.
    pub fn sort_attendance(&mut self) {
        self.attendance.sort_by(|a, b| match (a.full_date, b.full_date) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
    }

    /// Returns the day records belonging to the given month.
    pub fn records_in_month(&self, year: i32, month: u32) -> Vec<&AttendanceRecord> {
        self.attendance
            .iter()
            .filter(|record| record.year == year && record.month == month)
            .collect()
    }
}
