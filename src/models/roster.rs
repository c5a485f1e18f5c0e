//! The in-memory roster of employees.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::employee::EmployeeRecord;

/// The full set of employees known to the engine.
///
/// Owned by whichever layer is driving the pipeline (the HTTP state in the
/// server, a local variable in tests) and mutated only through the merge
/// engine. Employee identity is the case-insensitive name plus the exact
/// employee id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<EmployeeRecord>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// All employees, in first-seen order.
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    /// Finds an employee by identity pair.
    pub fn find(&self, name: &str, employee_id: &str) -> Option<&EmployeeRecord> {
        self.employees
            .iter()
            .find(|employee| employee.matches(name, employee_id))
    }

    /// Finds an employee by identity pair, mutably.
    pub fn find_mut(&mut self, name: &str, employee_id: &str) -> Option<&mut EmployeeRecord> {
        self.employees
            .iter_mut()
            .find(|employee| employee.matches(name, employee_id))
    }

    /// Finds an employee by case-insensitive name alone.
    pub fn find_by_name(&self, name: &str) -> Option<&EmployeeRecord> {
        let wanted = name.to_lowercase();
        self.employees
            .iter()
            .find(|employee| employee.name.to_lowercase() == wanted)
    }

    /// Appends a new employee to the roster.
    pub fn push(&mut self, employee: EmployeeRecord) {
        self.employees.push(employee);
    }

    /// Sorted unique `YYYY-MM` keys across all report periods and day records.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Roster;
    ///
    /// let roster = Roster::new();
    /// assert!(roster.months().is_empty());
    /// ```
    pub fn months(&self) -> Vec<String> {
        let mut keys = BTreeSet::new();
        for employee in &self.employees {
            if let (Some(year), Some(month)) = (employee.year, employee.month) {
                keys.insert(format!("{year:04}-{month:02}"));
            }
            for record in &employee.attendance {
                keys.insert(record.month_key());
            }
        }
        keys.into_iter().collect()
    }

    /// Total number of day records across every employee.
    pub fn total_day_records(&self) -> usize {
        self.employees
            .iter()
            .map(|employee| employee.attendance.len())
            .sum()
    }

    /// Number of employees on the roster.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true when the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl From<Vec<EmployeeRecord>> for Roster {
    fn from(employees: Vec<EmployeeRecord>) -> Self {
        Self { employees }
    }
}
