//! HTTP API module for the attendance engine.
//!
//! This module provides the REST endpoints for importing terminal
//! exports, browsing classified attendance, and managing the holiday
//! calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HolidayRequest, ImportRequest, MonthFilter, MonthQuery};
pub use response::ApiError;
pub use state::AppState;
