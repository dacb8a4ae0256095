//! Convert an asset-registration spreadsheet into a seed migration script.

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use colored::Colorize;

pub const DEFAULT_SHEET: &str = "Asset Registration";
pub const DEFAULT_OUTPUT: &str = "V2__seed_from_excel.sql";

const NAME_COLUMN: &str = "Asset Name";
const STATUS_COLUMN: &str = "Status";
const PURCHASE_COLUMN: &str = "Purchase Date";

const DEFAULT_STATUS: &str = "AVAILABLE";
const DEFAULT_PURCHASE_DATE: &str = "2024-01-01";

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.trim().to_string()),
        Data::Float(f) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        other => Some(other.to_string()),
    }
}

fn column_index(headers: &[Option<String>], name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.as_deref() == Some(name))
}

fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

/// Read `sheet` from the workbook at `path` and return the seed script as a
/// string. One INSERT per data row; missing Status and Purchase Date cells
/// fall back to defaults.
pub fn convert(path: &Path, sheet: &str) -> Result<String> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;
    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("Failed to read sheet: {}", sheet))?;

    let mut rows = range.rows();
    let headers: Vec<Option<String>> = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();

    let name_col = column_index(&headers, NAME_COLUMN);
    let status_col = column_index(&headers, STATUS_COLUMN);
    let purchase_col = column_index(&headers, PURCHASE_COLUMN);
    if name_col.is_none() {
        log::warn!("sheet '{}' has no '{}' column, names will be empty", sheet, NAME_COLUMN);
    }

    let mut lines = vec![
        format!("-- Auto-generated from {} sheet", sheet),
        "DELETE FROM asset_master;".to_string(),
        String::new(),
    ];

    let cell = |row: &[Data], col: Option<usize>| -> Option<String> {
        col.and_then(|c| row.get(c)).and_then(cell_text)
    };

    let mut count = 0usize;
    for row in rows {
        let name = cell(row, name_col).unwrap_or_default();
        let status = cell(row, status_col).unwrap_or_else(|| DEFAULT_STATUS.into());
        let purchase = cell(row, purchase_col).unwrap_or_else(|| DEFAULT_PURCHASE_DATE.into());

        lines.push(format!(
            "INSERT INTO asset_master (asset_name_udv, asset_status, purchase_date, created_date) \
             VALUES ('{}','{}','{}',NOW());",
            escape(&name),
            escape(&status),
            escape(&purchase)
        ));
        count += 1;
    }

    log::debug!("converted {} rows from {}", count, path.display());
    Ok(lines.join("\n"))
}

pub fn run(input: &Path, sheet: &str, output: &Path) -> Result<()> {
    let script = convert(input, sheet)?;
    let inserts = script.lines().filter(|l| l.starts_with("INSERT")).count();

    std::fs::write(output, &script)
        .with_context(|| format!("Failed to write SQL file: {}", output.display()))?;

    println!("{} wrote {} INSERTs to {}", "Done:".green(), inserts, output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn write_fixture(path: &Path, headers: &[&str], rows: &[&[&str]]) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(DEFAULT_SHEET).unwrap();
        for (col, h) in headers.iter().enumerate() {
            worksheet.write_string(0, col as u16, *h).unwrap();
        }
        for (row_idx, row) in rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                worksheet
                    .write_string((row_idx + 1) as u32, col as u16, *value)
                    .unwrap();
            }
        }
        workbook.save(path).unwrap();
    }

    #[test]
    fn test_convert_emits_one_insert_per_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.xlsx");
        write_fixture(
            &path,
            &["Asset Name", "Status", "Purchase Date"],
            &[
                &["Laptop", "IN_USE", "2023-06-15"],
                &["Monitor", "AVAILABLE", "2024-02-01"],
            ],
        );

        let script = convert(&path, DEFAULT_SHEET).unwrap();
        assert!(script.starts_with("-- Auto-generated from Asset Registration sheet"));
        assert!(script.contains("DELETE FROM asset_master;"));
        assert!(script.contains("VALUES ('Laptop','IN_USE','2023-06-15',NOW());"));
        assert!(script.contains("VALUES ('Monitor','AVAILABLE','2024-02-01',NOW());"));
        assert_eq!(script.lines().filter(|l| l.starts_with("INSERT")).count(), 2);
    }

    #[test]
    fn test_convert_defaults_for_missing_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.xlsx");
        write_fixture(&path, &["Asset Name"], &[&["Printer"]]);

        let script = convert(&path, DEFAULT_SHEET).unwrap();
        assert!(script.contains("VALUES ('Printer','AVAILABLE','2024-01-01',NOW());"));
    }

    #[test]
    fn test_convert_escapes_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.xlsx");
        write_fixture(
            &path,
            &["Asset Name", "Status", "Purchase Date"],
            &[&["John's Laptop", "IN_USE", "2023-01-01"]],
        );

        let script = convert(&path, DEFAULT_SHEET).unwrap();
        assert!(script.contains("'John''s Laptop'"));
    }

    #[test]
    fn test_missing_sheet_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.xlsx");
        write_fixture(&path, &["Asset Name"], &[]);

        assert!(convert(&path, "Nonexistent").is_err());
    }
}
