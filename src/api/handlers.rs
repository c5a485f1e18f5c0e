//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::classify::{classify_day, has_passed, summarize};
use crate::extract::{verify_day_codes, Workbook};
use crate::merge::merge_records;
use crate::models::AttendanceRecord;

use super::request::{HolidayQuery, HolidayRequest, ImportRequest, MonthFilter, MonthQuery};
use super::response::{
    ApiError, ApiErrorResponse, DayRecordResponse, EmployeeRecordsResponse, EmployeeSummary,
    EmployeesResponse, HolidayRemoveResponse, HolidayToggleResponse, HolidaysResponse,
    ImportResponse, MonthsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/import", post(import_handler))
        .route("/employees", get(employees_handler))
        .route("/employees/:name/records", get(employee_records_handler))
        .route("/months", get(months_handler))
        .route(
            "/holidays",
            get(holidays_handler)
                .post(toggle_holiday_handler)
                .delete(remove_holiday_handler),
        )
        .with_state(state)
}

/// Turns a body rejection into the 400 response all JSON endpoints share.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn invalid_month_response(raw: &MonthQuery) -> Response {
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error: ApiError::validation_error(format!(
            "Invalid month filter '{}': expected YYYY-MM",
            raw.month.as_deref().unwrap_or("")
        )),
    }
    .into_response()
}

/// Handler for the POST /import endpoint.
///
/// Opens the named workbook, extracts every employee block from every
/// sheet, merges the result into the roster, and persists the snapshot.
async fn import_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        path = %request.path,
        "Processing import request"
    );

    let start_time = Instant::now();
    let mut workbook = match Workbook::open(&request.path) {
        Ok(workbook) => workbook,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Import rejected");
            return ApiErrorResponse::from(err).into_response();
        }
    };
    let sheets = workbook.sheet_names().len();

    let extracted = match workbook.extract_all() {
        Ok(extracted) => extracted,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Extraction failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };
    let employees = extracted.len();

    if state.config().verify_day_codes {
        for employee in &extracted {
            verify_day_codes(&employee.name, &employee.attendance);
        }
    }

    let report = {
        let mut roster = state.roster().lock().await;
        merge_records(&mut roster, extracted)
    };

    let saved = match state.persist().await {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Snapshot save failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        sheets,
        employees,
        employees_added = report.employees_added,
        records_added = report.records_added,
        duplicates_skipped = report.duplicates_skipped,
        duration_us = duration.as_micros(),
        "Import completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ImportResponse {
            sheets,
            employees,
            report,
            saved,
        }),
    )
        .into_response()
}

/// Handler for the GET /employees endpoint.
///
/// Returns one classification summary per roster employee, optionally
/// restricted to a single `YYYY-MM` month.
async fn employees_handler(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> impl IntoResponse {
    let Some(filter) = query.filter() else {
        return invalid_month_response(&query);
    };

    let today = Local::now().date_naive();
    let roster = state.roster().lock().await;
    let holidays = state.holidays().lock().await;

    let employees = roster
        .employees()
        .iter()
        .map(|employee| {
            let summary = match filter {
                MonthFilter::All => summarize(&employee.attendance, &holidays, today),
                MonthFilter::Month { year, month } => {
                    let records: Vec<AttendanceRecord> = employee
                        .records_in_month(year, month)
                        .into_iter()
                        .cloned()
                        .collect();
                    summarize(&records, &holidays, today)
                }
            };
            EmployeeSummary {
                name: employee.name.clone(),
                employee_id: employee.employee_id.clone(),
                department: employee.department.clone(),
                summary,
            }
        })
        .collect();

    Json(EmployeesResponse { employees }).into_response()
}

/// Handler for the GET /employees/:name/records endpoint.
///
/// Returns the employee's day records with each day's classification.
async fn employee_records_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<MonthQuery>,
) -> impl IntoResponse {
    let Some(filter) = query.filter() else {
        return invalid_month_response(&query);
    };

    let today = Local::now().date_naive();
    let roster = state.roster().lock().await;
    let holidays = state.holidays().lock().await;

    let Some(employee) = roster.find_by_name(&name) else {
        return ApiErrorResponse {
            status: StatusCode::NOT_FOUND,
            error: ApiError::employee_not_found(&name),
        }
        .into_response();
    };

    let selected: Vec<AttendanceRecord> = match filter {
        MonthFilter::All => employee.attendance.clone(),
        MonthFilter::Month { year, month } => employee
            .records_in_month(year, month)
            .into_iter()
            .cloned()
            .collect(),
    };

    let records = selected
        .into_iter()
        .map(|record| {
            let status = classify_day(&record, &holidays);
            let counted = has_passed(&record, today);
            DayRecordResponse {
                record,
                status,
                counted,
            }
        })
        .collect();

    Json(EmployeeRecordsResponse {
        name: employee.name.clone(),
        employee_id: employee.employee_id.clone(),
        records,
    })
    .into_response()
}

/// Handler for the GET /months endpoint.
async fn months_handler(State(state): State<AppState>) -> impl IntoResponse {
    let roster = state.roster().lock().await;
    Json(MonthsResponse {
        months: roster.months(),
    })
}

/// Handler for the GET /holidays endpoint.
///
/// With no parameters, lists the whole calendar; with `year` and `month`,
/// lists one month's holidays. A lone `year` or lone `month` is rejected.
async fn holidays_handler(
    State(state): State<AppState>,
    Query(query): Query<HolidayQuery>,
) -> impl IntoResponse {
    let holidays = state.holidays().lock().await;
    let selected = match (query.year, query.month) {
        (Some(year), Some(month)) => holidays.for_month(year, month),
        (None, None) => holidays.iter().collect(),
        _ => {
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error("year and month must be given together"),
            }
            .into_response();
        }
    };
    Json(HolidaysResponse { holidays: selected }).into_response()
}

/// Handler for the POST /holidays endpoint.
///
/// Toggles the date's holiday status and persists the calendar.
async fn toggle_holiday_handler(
    State(state): State<AppState>,
    payload: Result<Json<HolidayRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let is_holiday = {
        let mut holidays = state.holidays().lock().await;
        holidays.toggle(request.date)
    };

    let saved = match state.persist().await {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Snapshot save failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        date = %request.date,
        is_holiday,
        "Holiday toggled"
    );
    Json(HolidayToggleResponse {
        date: request.date,
        is_holiday,
        saved,
    })
    .into_response()
}

/// Handler for the DELETE /holidays endpoint.
async fn remove_holiday_handler(
    State(state): State<AppState>,
    payload: Result<Json<HolidayRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let removed = {
        let mut holidays = state.holidays().lock().await;
        holidays.remove(request.date)
    };

    let saved = match state.persist().await {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Snapshot save failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        date = %request.date,
        removed,
        "Holiday removed"
    );
    Json(HolidayRemoveResponse {
        date: request.date,
        removed,
        saved,
    })
    .into_response()
}
