//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the boundary-level failures that can occur while ingesting workbooks,
//! loading configuration, and persisting snapshots.
//!
//! Parsing-level anomalies (malformed header tokens, unrecognized rows,
//! unparseable time cells) are deliberately NOT errors: the extraction
//! pipeline degrades them to `None`/empty fields so that one irregular cell
//! never aborts a sheet.

use thiserror::Error;

/// The main error type for the attendance engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::UnsupportedFile {
///     path: "report.pdf".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Unsupported file type: report.pdf (expected .xlsx or .xls)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The uploaded file does not have a spreadsheet extension.
    #[error("Unsupported file type: {path} (expected .xlsx or .xls)")]
    UnsupportedFile {
        /// The path that was rejected.
        path: String,
    },

    /// The workbook could not be opened or read.
    #[error("Failed to open workbook '{path}': {message}")]
    WorkbookOpen {
        /// The path to the workbook that failed to open.
        path: String,
        /// A description of the underlying read failure.
        message: String,
    },

    /// The requested sheet does not exist in the loaded workbook.
    #[error("Sheet not found in workbook: {name}")]
    SheetNotFound {
        /// The sheet name that was requested.
        name: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A stored snapshot could not be read.
    #[error("Failed to read snapshot '{path}': {message}")]
    StoreRead {
        /// The path to the snapshot that failed to load.
        path: String,
        /// A description of the read or decode failure.
        message: String,
    },

    /// A snapshot could not be written to the store.
    #[error("Failed to write snapshot '{path}': {message}")]
    StoreWrite {
        /// The path to the snapshot that failed to save.
        path: String,
        /// A description of the write failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
