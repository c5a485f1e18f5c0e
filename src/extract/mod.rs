//! Spreadsheet extraction pipeline.
//!
//! Turns a terminal export workbook into typed employee records in four
//! layers: cell parsers ([`time_cell`], [`header`], [`date_range`]), the
//! day-row table extractor ([`table`]), the per-sheet driver ([`sheet`]),
//! and the calamine adapter ([`workbook`]). All layers below the adapter
//! are pure functions over string grids.

pub mod date_range;
pub mod header;
pub mod sheet;
pub mod table;
pub mod time_cell;
pub mod workbook;

pub use date_range::{ParsedDateRange, parse_date_range};
pub use header::{HeaderFields, HeaderTag, HeaderToken, parse_header_row, tokenize_header};
pub use sheet::{HEADER_TO_TABLE_OFFSET, extract_sheet_records};
pub use table::{DEFAULT_SHEET_YEAR, SCAN_LIMIT, extract_attendance_table, verify_day_codes};
pub use time_cell::parse_time_cell;
pub use workbook::{SUPPORTED_EXTENSIONS, Workbook};
