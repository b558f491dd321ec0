//! Shared workbook fixtures for integration tests

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write an xlsx file; empty strings are left as empty cells
pub fn write_workbook(dir: &TempDir, sheets: &[(&str, Vec<Vec<&str>>)]) -> PathBuf {
    let path = dir.path().join("import.xlsx");
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if !cell.is_empty() {
                    sheet.write_string(r as u32, c as u16, *cell).unwrap();
                }
            }
        }
    }
    workbook.save(&path).unwrap();
    path
}

/// `agent` + `ci - Server`, one row each
pub fn scenario_workbook(dir: &TempDir) -> PathBuf {
    write_workbook(
        dir,
        &[
            ("agent", vec![vec!["name", "email"], vec!["Alice", "a@x.com"]]),
            (
                "ci - Server",
                vec![
                    vec!["name", "attrDate-Purchased"],
                    vec!["Srv1", "June 1 2024"],
                ],
            ),
        ],
    )
}
