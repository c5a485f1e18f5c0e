//! Merging freshly extracted records into the roster.
//!
//! Imports arrive file by file, usually overlapping: a month-end export
//! repeats days already seen in a mid-month one. The merge engine makes
//! re-imports safe by matching employees by identity and appending only
//! day records whose (date, month, year) triple is new.

use serde::{Deserialize, Serialize};

use crate::models::{EmployeeRecord, Roster};

/// Counters describing what one merge changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Employees not previously on the roster.
    pub employees_added: usize,
    /// Existing employees matched by identity.
    pub employees_merged: usize,
    /// Day records appended, across all employees.
    pub records_added: usize,
    /// Day records dropped because their day was already present.
    pub duplicates_skipped: usize,
}

impl MergeReport {
    /// Returns true when the merge changed the roster.
    pub fn changed(&self) -> bool {
        self.employees_added > 0 || self.records_added > 0
    }
}

/// Merges extracted records into the roster.
///
/// Each new record is matched against the roster (including entries added
/// earlier in the same call) by case-insensitive name plus exact employee
/// id. On a match, day records are appended unless their day is already
/// present, and the department is backfilled when the existing one is
/// empty. Unmatched records join the roster as new employees, their day
/// records deduplicated the same way. Every touched employee's
/// attendance ends up ascending by date, undated records last.
///
/// Importing the same data twice is a no-op the second time:
///
/// ```
/// use attendance_engine::merge::merge_records;
/// use attendance_engine::models::Roster;
///
/// let mut roster = Roster::new();
/// let report = merge_records(&mut roster, Vec::new());
/// assert!(!report.changed());
/// ```
pub fn merge_records(roster: &mut Roster, new_records: Vec<EmployeeRecord>) -> MergeReport {
    let mut report = MergeReport::default();

    for new_employee in new_records {
        match roster.find_mut(&new_employee.name, &new_employee.employee_id) {
            Some(existing) => {
                report.employees_merged += 1;
                if existing.department.is_empty() && !new_employee.department.is_empty() {
                    existing.department = new_employee.department;
                }
                for record in new_employee.attendance {
                    let already_present = existing
                        .attendance
                        .iter()
                        .any(|existing_record| existing_record.day_key() == record.day_key());
                    if already_present {
                        report.duplicates_skipped += 1;
                    } else {
                        existing.attendance.push(record);
                        report.records_added += 1;
                    }
                }
                existing.sort_attendance();
            }
            None => {
                report.employees_added += 1;
                let mut employee = new_employee;
                let incoming = std::mem::take(&mut employee.attendance);
                for record in incoming {
                    let already_present = employee
                        .attendance
                        .iter()
                        .any(|existing_record| existing_record.day_key() == record.day_key());
                    if already_present {
                        report.duplicates_skipped += 1;
                    } else {
                        employee.attendance.push(record);
                        report.records_added += 1;
                    }
                }
                employee.sort_attendance();
                roster.push(employee);
            }
        }
    }

    report
}
