//! Excel workbook writers.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::info;

use vaya_model::{
    CANONICAL_FIELD_COUNT, CanonicalField, CanonicalTable, CellValue, RawTable, SINGLE_SHEET_NAME,
    StandardizedSheet,
};

use crate::common::{ensure_parent_dir, unique_sheet_names};
use crate::error::{OutputError, Result};

const FONT_NAME: &str = "Arial";
const HEADER_FILL: u32 = 0x4472C4;
const HEADER_ROW_HEIGHT: f64 = 30.0;

struct SheetFormats {
    header: Format,
    numeric: Format,
    text: Format,
}

impl SheetFormats {
    fn new() -> Self {
        let body = Format::new()
            .set_font_name(FONT_NAME)
            .set_font_size(10)
            .set_border(FormatBorder::Thin)
            .set_border_color(Color::Black);
        Self {
            header: Format::new()
                .set_font_name(FONT_NAME)
                .set_font_size(11)
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(HEADER_FILL))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap()
                .set_border(FormatBorder::Thin)
                .set_border_color(Color::Black),
            numeric: body.clone().set_align(FormatAlign::Right),
            text: body.set_align(FormatAlign::Left),
        }
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    format: &Format,
) -> std::result::Result<(), XlsxError> {
    match value {
        CellValue::Number(number) if !number.is_nan() => {
            worksheet.write_number_with_format(row, col, *number, format)?;
        }
        CellValue::Text(text) if !text.trim().is_empty() => {
            worksheet.write_string_with_format(row, col, text, format)?;
        }
        _ => {
            worksheet.write_blank(row, col, format)?;
        }
    }
    Ok(())
}

fn fill_standardized_sheet(
    worksheet: &mut Worksheet,
    name: &str,
    table: &CanonicalTable,
    formats: &SheetFormats,
) -> std::result::Result<(), XlsxError> {
    worksheet.set_name(name)?;

    for field in CanonicalField::ALL {
        let col = field.index() as u16;
        worksheet.set_column_width(col, field.column_width())?;
        worksheet.write_string_with_format(0, col, field.header(), &formats.header)?;
    }
    worksheet.set_row_height(0, HEADER_ROW_HEIGHT)?;

    for (index, row) in table.rows.iter().enumerate() {
        let row_num = index as u32 + 1;
        for (field, value) in CanonicalField::ALL.iter().zip(row.cells()) {
            let format = if field.is_numeric() {
                &formats.numeric
            } else {
                &formats.text
            };
            write_cell(worksheet, row_num, field.index() as u16, value, format)?;
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

/// Writes one styled worksheet per standardized sheet.
///
/// Every worksheet carries the 17 canonical headers, fixed column widths
/// and a frozen header row. Sheet names are made Excel-safe and unique.
pub fn write_standardized_workbook(path: &Path, sheets: &[StandardizedSheet]) -> Result<()> {
    if sheets.is_empty() {
        return Err(OutputError::NothingToWrite {
            path: path.to_path_buf(),
        });
    }
    ensure_parent_dir(path)?;
    let xlsx_error = |source| OutputError::Xlsx {
        path: path.to_path_buf(),
        source,
    };

    let formats = SheetFormats::new();
    let names = unique_sheet_names(sheets.iter().map(|sheet| sheet.name.as_str()));
    let mut workbook = Workbook::new();
    for (sheet, name) in sheets.iter().zip(&names) {
        let worksheet = workbook.add_worksheet();
        fill_standardized_sheet(worksheet, name, &sheet.table, &formats).map_err(xlsx_error)?;
    }
    workbook.save(path).map_err(xlsx_error)?;

    let rows: usize = sheets.iter().map(|sheet| sheet.table.len()).sum();
    info!(
        path = %path.display(),
        sheets = sheets.len(),
        rows,
        columns = CANONICAL_FIELD_COUNT,
        "wrote standardized workbook"
    );
    Ok(())
}

/// Writes an extracted table as a plain single-sheet workbook.
pub fn write_raw_workbook(path: &Path, table: &RawTable) -> Result<()> {
    ensure_parent_dir(path)?;
    let xlsx_error = |source| OutputError::Xlsx {
        path: path.to_path_buf(),
        source,
    };

    let header = Format::new().set_bold().set_border(FormatBorder::Thin);
    let plain = Format::new();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SINGLE_SHEET_NAME).map_err(xlsx_error)?;
    for (col, name) in table.columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, name, &header)
            .map_err(xlsx_error)?;
    }
    for (index, row) in table.rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            write_cell(worksheet, index as u32 + 1, col as u16, value, &plain).map_err(xlsx_error)?;
        }
    }
    workbook.save(path).map_err(xlsx_error)?;

    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.columns.len(),
        "wrote extracted workbook"
    );
    Ok(())
}
