//! Workbook loading.
//!
//! Thin adapter over calamine: opens `.xls`/`.xlsx` files, converts each
//! worksheet to a row-major string grid in absolute sheet coordinates,
//! and runs the sheet extractor over it. Everything downstream of this
//! module works on plain string grids and never sees the spreadsheet
//! library.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets};

use crate::error::{EngineError, EngineResult};
use crate::extract::sheet::extract_sheet_records;
use crate::models::EmployeeRecord;

/// File extensions accepted for import.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// An opened terminal export workbook.
pub struct Workbook {
    path: String,
    sheets: Sheets<BufReader<File>>,
}

impl std::fmt::Debug for Workbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbook")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Workbook {
    /// Opens a workbook for extraction.
    ///
    /// The file extension is checked before anything touches the file:
    /// paths that are not `.xls` or `.xlsx` (case-insensitive) are
    /// rejected with [`EngineError::UnsupportedFile`]. Files that fail to
    /// open or parse surface as [`EngineError::WorkbookOpen`].
    pub fn open(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let supported = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_lowercase())
            .is_some_and(|extension| SUPPORTED_EXTENSIONS.contains(&extension.as_str()));
        if !supported {
            return Err(EngineError::UnsupportedFile { path: display });
        }

        let sheets =
            calamine::open_workbook_auto(path).map_err(|error| EngineError::WorkbookOpen {
                path: display.clone(),
                message: error.to_string(),
            })?;
        Ok(Self {
            path: display,
            sheets,
        })
    }

    /// Names of all worksheets, in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// One worksheet as a row-major grid of cell texts.
    ///
    /// Empty cells become empty strings and numeric cells are rendered
    /// with their shortest decimal form, so the extractors can treat
    /// every cell uniformly. Rows and columns before the sheet's used
    /// range are padded so indices match what a spreadsheet UI shows.
    pub fn grid(&mut self, sheet_name: &str) -> EngineResult<Vec<Vec<String>>> {
        if !self.sheet_names().iter().any(|name| name == sheet_name) {
            return Err(EngineError::SheetNotFound {
                name: sheet_name.to_string(),
            });
        }
        let range = self
            .sheets
            .worksheet_range(sheet_name)
            .map_err(|error| EngineError::WorkbookOpen {
                path: self.path.clone(),
                message: error.to_string(),
            })?;
        Ok(range_to_grid(&range))
    }

    /// Extracts every employee block from one worksheet.
    pub fn extract_sheet(&mut self, sheet_name: &str) -> EngineResult<Vec<EmployeeRecord>> {
        let grid = self.grid(sheet_name)?;
        Ok(extract_sheet_records(sheet_name, &grid))
    }

    /// Extracts every employee block from every worksheet, in sheet order.
    pub fn extract_all(&mut self) -> EngineResult<Vec<EmployeeRecord>> {
        let mut records = Vec::new();
        for sheet_name in self.sheet_names() {
            records.extend(self.extract_sheet(&sheet_name)?);
        }
        Ok(records)
    }
}

fn range_to_grid(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut grid: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(cell_text));
        grid.push(cells);
    }
    grid
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => value.as_f64().to_string(),
        Data::DateTimeIso(text) | Data::DurationIso(text) => text.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}
