//! Request types for the attendance engine API.
//!
//! This module defines the JSON request bodies and query parameters the
//! endpoints accept.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for the `/import` endpoint.
///
/// Names a spreadsheet file on a filesystem the engine can reach. The
/// engine opens the file itself; the request carries no file content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Path to the `.xlsx` or `.xls` terminal export.
    pub path: String,
}

/// Request body for the holiday mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The calendar date to toggle or remove.
    pub date: NaiveDate,
}

/// Optional `?month=YYYY-MM` query accepted by the roster views.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthQuery {
    /// The month filter, e.g. `2025-06`. Absent means all months.
    #[serde(default)]
    pub month: Option<String>,
}

/// A parsed month filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    /// No filter: include every record.
    All,
    /// Restrict to one calendar month.
    Month {
        /// Four-digit year.
        year: i32,
        /// Month number, 1-12.
        month: u32,
    },
}

impl MonthQuery {
    /// Parses the query into a filter.
    ///
    /// Returns `None` when a `month` value is present but is not a valid
    /// `YYYY-MM` key; handlers turn that into a validation error.
    pub fn filter(&self) -> Option<MonthFilter> {
        let Some(raw) = &self.month else {
            return Some(MonthFilter::All);
        };
        let (year, month) = raw.split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(MonthFilter::Month { year, month })
    }
}

/// Optional year/month pair accepted by `GET /holidays`.
///
/// Both parameters must be given together; a bare year or bare month is
/// rejected by the handler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidayQuery {
    /// Four-digit year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Month number, 1-12.
    #[serde(default)]
    pub month: Option<u32>,
}
