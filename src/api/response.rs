//! Response types for the attendance engine API.
//!
//! This module defines the success payloads returned by the endpoints,
//! the error response structure, and the mapping from engine errors to
//! HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::{AttendanceSummary, DayStatus};
use crate::error::EngineError;
use crate::merge::MergeReport;
use crate::models::AttendanceRecord;
use crate::store::SaveOutcome;

/// Response body for a completed import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    /// Number of worksheets scanned.
    pub sheets: usize,
    /// Number of employee blocks found in the workbook.
    pub employees: usize,
    /// What the merge changed on the roster.
    pub report: MergeReport,
    /// How far the updated snapshot propagated.
    pub saved: SaveOutcome,
}

/// One employee's classification summary, as listed by `GET /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee's normalized name.
    pub name: String,
    /// The terminal-assigned employee id.
    pub employee_id: String,
    /// Department, possibly empty when no sheet carried one.
    pub department: String,
    /// Counts, rates, grade, and streak over the selected records.
    pub summary: AttendanceSummary,
}

/// Response body for `GET /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeesResponse {
    /// One entry per roster employee, in roster order.
    pub employees: Vec<EmployeeSummary>,
}

/// One classified day, as returned by the per-employee records view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecordResponse {
    /// The raw day record.
    pub record: AttendanceRecord,
    /// The day's classification against the holiday calendar.
    pub status: DayStatus,
    /// Whether the day has passed and participates in counts.
    pub counted: bool,
}

/// Response body for `GET /employees/:name/records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecordsResponse {
    /// The employee's normalized name.
    pub name: String,
    /// The terminal-assigned employee id.
    pub employee_id: String,
    /// The selected day records, ascending by date.
    pub records: Vec<DayRecordResponse>,
}

/// Response body for `GET /months`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthsResponse {
    /// Sorted unique `YYYY-MM` keys with data on the roster.
    pub months: Vec<String>,
}

/// Response body for `GET /holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// The selected holiday dates, ascending.
    pub holidays: Vec<NaiveDate>,
}

/// Response body for `POST /holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayToggleResponse {
    /// The toggled date.
    pub date: NaiveDate,
    /// Whether the date is a holiday after the toggle.
    pub is_holiday: bool,
    /// How far the updated snapshot propagated.
    pub saved: SaveOutcome,
}

/// Response body for `DELETE /holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRemoveResponse {
    /// The removed date.
    pub date: NaiveDate,
    /// Whether the date was on the calendar before removal.
    pub removed: bool,
    /// How far the updated snapshot propagated.
    pub saved: SaveOutcome,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(name: &str) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("Employee not found: {}", name),
            "No roster employee matches that name, ignoring case",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::UnsupportedFile { path } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNSUPPORTED_FILE",
                    format!("Unsupported file type: {}", path),
                    "Only .xlsx and .xls files can be imported",
                ),
            },
            EngineError::WorkbookOpen { path, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "WORKBOOK_OPEN",
                    format!("Failed to open workbook: {}", path),
                    message,
                ),
            },
            EngineError::SheetNotFound { name } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "SHEET_NOT_FOUND",
                    format!("Sheet not found in workbook: {}", name),
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::StoreRead { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Snapshot read failed",
                    format!("{}: {}", path, message),
                ),
            },
            EngineError::StoreWrite { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Snapshot write failed",
                    format!("{}: {}", path, message),
                ),
            },
        }
    }
}
