//! Extraction from PDF files written to disk.

use std::fs;
use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use tempfile::TempDir;
use vaya_model::{CellValue, ExtractionMethod, ExtractionOptions};
use vaya_pdf::{PdfError, PdfPage, extract_pdf_file, read_pdf_pages};

/// A string shown at `(x, y)` in PDF user space.
type Placed = (&'static str, i64, i64);

/// Writes a PDF with one page per entry, every string in 10pt Courier.
fn write_pdf(path: &Path, pages: &[Vec<Placed>], media_box: bool) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for strings in pages {
        let operations: Vec<Operation> = strings
            .iter()
            .flat_map(|&(text, x, y)| {
                [
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 10.into()]),
                    Operation::new("Td", vec![x.into(), y.into()]),
                    Operation::new("Tj", vec![Object::string_literal(text)]),
                    Operation::new("ET", vec![]),
                ]
            })
            .collect();
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let mut tree = dictionary! {
        "Type" => "Pages",
        "Count" => kids.len() as i64,
        "Kids" => kids,
        "Resources" => resources_id,
    };
    if media_box {
        let corners: Vec<Object> = vec![0.into(), 0.into(), 595.into(), 842.into()];
        tree.set("MediaBox", corners);
    }
    doc.objects.insert(pages_id, Object::Dictionary(tree));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    fs::write(path, bytes).unwrap();
}

/// A two-column table with the header on top and cells at x=72 and x=300.
fn rate_table(rows: &[(&'static str, &'static str)]) -> Vec<Placed> {
    std::iter::once(("Design", "Rate"))
        .chain(rows.iter().copied())
        .enumerate()
        .flat_map(|(index, (design, rate))| {
            let y = 760 - 16 * index as i64;
            [(design, 72, y), (rate, 300, y)]
        })
        .collect()
}

fn two_page_catalog(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    write_pdf(
        &path,
        &[
            rate_table(&[("Aurora", "450"), ("Borealis", "520")]),
            rate_table(&[("Cirrus", "610"), ("Dawn", "380")]),
        ],
        true,
    );
    path
}

#[test]
fn pages_keep_text_and_tables() {
    let dir = TempDir::new().unwrap();
    let path = two_page_catalog(&dir, "catalog.pdf");

    let pages = read_pdf_pages(&path).unwrap();
    assert_eq!(pages.len(), 2);
    let text = pages[0].text().unwrap();
    assert!(text.contains("Aurora 450"), "{text}");
    let tables = pages[1].tables();
    assert_eq!(tables.len(), 1);
    assert_eq!(
        tables[0][2],
        vec![Some("Dawn".to_string()), Some("380".to_string())]
    );
}

#[test]
fn generic_tables_span_every_page() {
    let dir = TempDir::new().unwrap();
    let path = two_page_catalog(&dir, "catalog.pdf");

    let table = extract_pdf_file(&path, &ExtractionOptions::default()).unwrap();
    assert_eq!(table.columns, vec!["Design", "Rate"]);
    assert_eq!(table.row_count(), 4);
    assert_eq!(table.rows[2][0], CellValue::text("Cirrus"));
    assert_eq!(table.rows[3][1], CellValue::text("380"));
}

#[test]
fn price_list_without_product_lines_falls_back_to_tables() {
    let dir = TempDir::new().unwrap();
    let path = two_page_catalog(&dir, "FABRIZIO price list.pdf");

    let table = extract_pdf_file(&path, &ExtractionOptions::default()).unwrap();
    assert_eq!(table.columns, vec!["Design", "Rate"]);
    assert_eq!(table.row_count(), 4);
}

#[test]
fn product_lines_are_captured_from_page_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Fabrizio_2025.pdf");
    write_pdf(
        &path,
        &[vec![
            ("FABRIZIO NEW PRICE LIST", 72, 790),
            ("COLLECTION NAME PRODUCT NAME COMPOSITION", 40, 770),
            ("Revo Revo 100% POLYESTER 50000+ 54075200 140 5% 350/-", 40, 750),
            ("Luna Lux 100% PES 30000+ 58013700 280 12% 1200/-", 40, 734),
        ]],
        true,
    );

    let options = ExtractionOptions::default().with_method(ExtractionMethod::Profile);
    let table = extract_pdf_file(&path, &options).unwrap();
    assert_eq!(table.row_count(), 2);
    let dp = table.column_index("DP").unwrap();
    assert_eq!(table.rows[0][dp], CellValue::text("350"));
    assert_eq!(table.rows[1][dp], CellValue::text("1200"));
}

#[test]
fn parser_panic_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_media_box.pdf");
    write_pdf(&path, &[rate_table(&[("Aurora", "450")])], false);

    match read_pdf_pages(&path) {
        Err(PdfError::Read { message, .. }) => assert!(message.contains("panicked"), "{message}"),
        other => panic!("expected a read error, got {other:?}"),
    }
}

#[test]
fn garbage_bytes_are_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.pdf");
    fs::write(&path, b"not a pdf").unwrap();
    let result = extract_pdf_file(&path, &ExtractionOptions::default());
    assert!(matches!(result, Err(PdfError::Read { .. })));
}
