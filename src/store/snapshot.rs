//! The persisted snapshot format.

use serde::{Deserialize, Serialize};

use crate::models::{HolidaySet, Roster};

/// Everything the engine persists between runs.
///
/// A snapshot is written wholesale on every mutation and read back in full
/// on startup. All calendar dates inside it serialize as ISO-8601 strings
/// (`YYYY-MM-DD`), so snapshots are portable across machines and time zones.
///
/// # Example
///
/// ```
/// use attendance_engine::store::StoreSnapshot;
///
/// let snapshot = StoreSnapshot::default();
/// assert!(snapshot.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// All employees with their merged attendance history.
    #[serde(default)]
    pub roster: Roster,
    /// The holiday calendar.
    #[serde(default)]
    pub holidays: HolidaySet,
}

impl StoreSnapshot {
    /// Creates a snapshot from the in-memory state.
    pub fn new(roster: Roster, holidays: HolidaySet) -> Self {
        Self { roster, holidays }
    }

    /// Returns true if the snapshot holds no employees and no holidays.
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty() && self.holidays.is_empty()
    }
}
