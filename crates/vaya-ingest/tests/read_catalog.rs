//! Reading catalogs from real files.

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;
use vaya_ingest::{IngestError, read_catalog};
use vaya_model::CellValue;

fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("SANSAAR_2024.xlsx");
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Rates").unwrap();
    for (col, header) in ["COLLECTION", "Description", "CL_RATE", "GST"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    sheet.write_string(1, 0, "Linen").unwrap();
    sheet.write_string(1, 1, "Plain Weave").unwrap();
    sheet.write_number(1, 2, 350).unwrap();
    sheet.write_string(1, 3, "5%").unwrap();

    let blank = workbook.add_worksheet();
    blank.set_name("Notes").unwrap();

    workbook.save(&path).unwrap();
    path
}

#[test]
fn workbook_sheets_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let sheets = read_catalog(&path).unwrap();
    assert_eq!(sheets.len(), 2);

    let (name, table) = &sheets[0];
    assert_eq!(name, "Rates");
    assert_eq!(table.columns, vec!["COLLECTION", "Description", "CL_RATE", "GST"]);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows[0][2], CellValue::Number(350.0));
    assert_eq!(table.rows[0][3], CellValue::text("5%"));

    let (name, table) = &sheets[1];
    assert_eq!(name, "Notes");
    assert!(table.is_empty());
}

#[test]
fn csv_is_one_sheet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fabrizio rates.csv");
    std::fs::write(&path, "PRODUCT NAME,HSNCODE,DP\nVelvet,58013700,420\n").unwrap();

    let sheets = read_catalog(&path).unwrap();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].0, "fabrizio rates");
    assert_eq!(sheets[0].1.rows[0][1], CellValue::text("58013700"));
}

#[test]
fn unsupported_and_missing_files() {
    let dir = TempDir::new().unwrap();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, "hello").unwrap();

    assert!(matches!(
        read_catalog(&notes),
        Err(IngestError::UnsupportedFileType { .. })
    ));
    assert!(matches!(
        read_catalog(&dir.path().join("gone.xlsx")),
        Err(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn unreadable_pdf_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, "not a pdf").unwrap();

    assert!(matches!(read_catalog(&path), Err(IngestError::Pdf(_))));
}
