//! Domain models for attendance data.
//!
//! This module contains the typed records produced by the extraction
//! pipeline and consumed by the merge engine, the classifier, and the
//! HTTP layer.

pub mod attendance;
pub mod employee;
pub mod holiday;
pub mod roster;

pub use attendance::{AttendanceRecord, ShiftPair};
pub use employee::{EmployeeRecord, ReportRange};
pub use holiday::HolidaySet;
pub use roster::Roster;
