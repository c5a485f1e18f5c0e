//! Sheet-level extraction.
//!
//! Walks a worksheet grid row by row, turning every header block plus
//! the attendance table beneath it into one [`EmployeeRecord`].

use crate::extract::date_range::parse_date_range;
use crate::extract::header::parse_header_row;
use crate::extract::table::extract_attendance_table;
use crate::models::{EmployeeRecord, ReportRange};

/// Rows between a header block and the first row of its attendance table.
pub const HEADER_TO_TABLE_OFFSET: usize = 3;

/// Extracts every employee block found on one worksheet.
///
/// Each row that parses as a header yields one record: the report period
/// comes from the header's date token, and the attendance table is read
/// starting [`HEADER_TO_TABLE_OFFSET`] rows below the header. Records are
/// returned in header occurrence order, tagged with the sheet name and
/// the 1-based header row for provenance.
pub fn extract_sheet_records(sheet_name: &str, grid: &[Vec<String>]) -> Vec<EmployeeRecord> {
    let mut records = Vec::new();

    for (row_index, row) in grid.iter().enumerate() {
        let Some(fields) = parse_header_row(row) else {
            continue;
        };
        let range = parse_date_range(&fields.date_range);
        let attendance =
            extract_attendance_table(grid, row_index + HEADER_TO_TABLE_OFFSET, range.year);

        records.push(EmployeeRecord {
            name: fields.name,
            employee_id: fields.employee_id,
            department: fields.department,
            report_range: ReportRange {
                start: range.start,
                end: range.end,
            },
            month: range.month,
            year: range.year,
            source_sheet: sheet_name.to_string(),
            source_row: row_index + 1,
            attendance,
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::table::DEFAULT_SHEET_YEAR;
    use chrono::NaiveDate;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    // ==========================================================================
    // SE-001: One header block becomes one employee record
    // ==========================================================================
    #[test]
    fn test_se_001_single_block() {
        let grid = grid(&[
            &["Name:John Smith ID:P001 Dept:Discipline Date:25.06.01~25.06.30"],
            &[""],
            &["Date", "Day", "Morning", "", "Afternoon", "", "Evening", ""],
            &["06.01", "MON", "06:40", "07:30", "", "", "", ""],
            &["06.02", "TUE", "06:42", "", "", "", "", ""],
        ]);

        let records = extract_sheet_records("Sheet1", &grid);
        assert_eq!(records.len(), 1);

        let employee = &records[0];
        assert_eq!(employee.name, "John Smith");
        assert_eq!(employee.employee_id, "P001");
        assert_eq!(employee.department, "Discipline");
        assert_eq!(
            employee.report_range.start,
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
        assert_eq!(
            employee.report_range.end,
            NaiveDate::from_ymd_opt(2025, 6, 30)
        );
        assert_eq!(employee.month, Some(6));
        assert_eq!(employee.year, Some(2025));
        assert_eq!(employee.attendance.len(), 2);
        assert_eq!(employee.attendance[0].date, "06.01");
        assert_eq!(employee.attendance[0].year, 2025);
    }

    // ==========================================================================
    // SE-002: Consecutive blocks split cleanly at the next header
    // ==========================================================================
    #[test]
    fn test_se_002_two_blocks() {
        let grid = grid(&[
            &["Name:First Person ID:1 Date:25.06.01~25.06.30"],
            &[""],
            &[""],
            &["06.01", "SUN", "06:40", "", "", "", "", ""],
            &["Name:Second Person ID:2 Date:25.06.01~25.06.30"],
            &[""],
            &[""],
            &["06.02", "MON", "06:50", "", "", "", "", ""],
        ]);

        let records = extract_sheet_records("Sheet1", &grid);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "First Person");
        assert_eq!(records[0].attendance.len(), 1);
        assert_eq!(records[0].attendance[0].date, "06.01");
        assert_eq!(records[1].name, "Second Person");
        assert_eq!(records[1].attendance.len(), 1);
        assert_eq!(records[1].attendance[0].date, "06.02");
    }

    // ==========================================================================
    // SE-003: Missing report period falls back to the default year
    // ==========================================================================
    #[test]
    fn test_se_003_missing_report_period() {
        let grid = grid(&[
            &["Name:No Range ID:5"],
            &[""],
            &[""],
            &["06.02", "MON", "06:40", "", "", "", "", ""],
        ]);

        let records = extract_sheet_records("Sheet1", &grid);
        assert_eq!(records[0].month, None);
        assert_eq!(records[0].year, None);
        assert!(records[0].report_range.is_empty());
        assert_eq!(records[0].attendance[0].year, DEFAULT_SHEET_YEAR);
    }

    // ==========================================================================
    // SE-004: Header rows without a usable name yield nothing
    // ==========================================================================
    #[test]
    fn test_se_004_empty_name_skipped() {
        let grid = grid(&[
            &["Name: ID:33 Date:25.06.01~25.06.30"],
            &[""],
            &[""],
            &["06.02", "MON", "06:40", "", "", "", "", ""],
        ]);

        assert!(extract_sheet_records("Sheet1", &grid).is_empty());
    }

    // ==========================================================================
    // SE-005: Provenance is the sheet name and 1-based header row
    // ==========================================================================
    #[test]
    fn test_se_005_provenance() {
        let grid = grid(&[
            &[""],
            &[""],
            &["Name:Aye Chan ID:33"],
        ]);

        let records = extract_sheet_records("June Export", &grid);
        assert_eq!(records[0].source_sheet, "June Export");
        assert_eq!(records[0].source_row, 3);
    }

    #[test]
    fn test_table_starts_three_rows_below_header() {
        let grid = grid(&[
            &["Name:Aye Chan ID:33 Date:25.06.01~25.06.30"],
            &["06.01", "SUN", "05:00", "", "", "", "", ""],
            &[""],
            &["06.02", "MON", "06:40", "", "", "", "", ""],
        ]);

        let records = extract_sheet_records("Sheet1", &grid);
        // The row directly under the header is part of the header banner,
        // not the table.
        assert_eq!(records[0].attendance.len(), 1);
        assert_eq!(records[0].attendance[0].date, "06.02");
    }

    #[test]
    fn test_header_near_sheet_bottom_has_no_table() {
        let grid = grid(&[&["Name:Aye Chan ID:33"]]);
        let records = extract_sheet_records("Sheet1", &grid);
        assert_eq!(records.len(), 1);
        assert!(records[0].attendance.is_empty());
    }
}
