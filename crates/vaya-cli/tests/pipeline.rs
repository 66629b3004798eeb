//! File-level pipeline runs against temporary directories.

use std::fs;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tempfile::TempDir;
use vaya_cli::pipeline::{
    BATCH_OUTPUT_DIR, resolve_workflow_dirs, run_batch, run_workflow, standardize_file,
};
use vaya_cli::types::{Stage, WorkflowDirs};
use vaya_model::{
    CatalogType, CellValue, ExtractionOptions, OutputFormat, RawTable, WorkflowConfig,
};
use vaya_output::write_raw_workbook;
use vaya_transform::StandardizeOptions;

const SANSAAR_CSV: &str = "COLLECTION,Description,Material Code,CL_RATE,GST,RRP With GST\n\
                           Linen,Plain Weave,60010203,350,5%,367.5\n\
                           Linen,Herringbone,60010204,400,5%,420\n";

fn write_file(path: &Path, contents: &[u8]) {
    fs::write(path, contents).unwrap();
}

fn data_rows(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook = open_workbook_auto(path).unwrap();
    let name = workbook.sheet_names()[0].clone();
    let range = workbook.worksheet_range(&name).unwrap();
    range.rows().skip(1).map(<[Data]>::to_vec).collect()
}

#[test]
fn standardize_csv_to_workbook() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("SANSAAR_2024.csv");
    write_file(&input, SANSAAR_CSV.as_bytes());
    let output = dir.path().join("out").join("SANSAAR_2024_STANDARDIZED.xlsx");

    let report = standardize_file(
        &input,
        &output,
        OutputFormat::Xlsx,
        &StandardizeOptions::default(),
    )
    .unwrap();
    assert!(report.is_success());
    assert_eq!(report.rows, 2);
    assert_eq!(report.sheets.len(), 1);
    assert_eq!(report.sheets[0].catalog_type, CatalogType::Sansaar);

    let rows = data_rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], Data::String("Linen".to_string()));
    assert_eq!(rows[0][10], Data::Float(350.0));
    assert_eq!(rows[1][10], Data::Float(400.0));
}

#[test]
fn standardize_rejects_pdf_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("FABRIZIO.pdf");
    write_file(&input, b"%PDF-1.4");
    let error = standardize_file(
        &input,
        &dir.path().join("out.xlsx"),
        OutputFormat::Xlsx,
        &StandardizeOptions::default(),
    )
    .unwrap_err();
    assert!(error.to_string().contains("is a PDF"));
}

#[test]
fn batch_reports_each_file_and_keeps_going() {
    let dir = TempDir::new().unwrap();
    write_file(&dir.path().join("SANSAAR_rates.csv"), SANSAAR_CSV.as_bytes());
    write_file(&dir.path().join("broken.pdf"), b"not a pdf");
    write_file(&dir.path().join("~$SANSAAR_rates.xlsx"), b"lock");
    write_file(&dir.path().join("notes.txt"), b"ignore me");
    let output_dir = dir.path().join(BATCH_OUTPUT_DIR);

    let report = run_batch(
        dir.path(),
        &output_dir,
        &ExtractionOptions::default(),
        &StandardizeOptions::default(),
    )
    .unwrap();

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.files[0].file_name(), "broken.pdf");
    assert!(!report.files[0].is_success());
    assert_eq!(report.files[1].file_name(), "SANSAAR_rates.csv");
    assert!(report.files[1].is_success());
    assert_eq!(report.succeeded(), 1);
    assert!(report.has_errors());
    assert!(output_dir.join("SANSAAR_rates_STANDARDIZED.xlsx").is_file());
}

#[test]
fn batch_refuses_to_overwrite_a_shared_output_name() {
    let dir = TempDir::new().unwrap();
    write_file(&dir.path().join("SANSAAR_rates.csv"), SANSAAR_CSV.as_bytes());
    let mut sheet = RawTable::new(vec!["COLLECTION".to_string(), "CL_RATE".to_string()]);
    sheet.push_row(vec![CellValue::text("Velvet"), CellValue::text("900")]);
    write_raw_workbook(&dir.path().join("SANSAAR_rates.xlsx"), &sheet).unwrap();
    let output_dir = dir.path().join(BATCH_OUTPUT_DIR);

    let report = run_batch(
        dir.path(),
        &output_dir,
        &ExtractionOptions::default(),
        &StandardizeOptions::default(),
    )
    .unwrap();

    assert_eq!(report.files.len(), 2);
    let collisions: Vec<&str> = report
        .files
        .iter()
        .filter_map(|file| file.error.as_deref())
        .filter(|error| error.contains("already written by another input"))
        .collect();
    assert_eq!(collisions.len(), 1, "{:?}", report.files);
}

#[test]
fn workflow_dirs_merge_file_and_flags() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("workflow.json");
    write_file(
        &config,
        br#"{"sourceDir": "pdfs", "intermediateDir": "raw", "outputDir": "file-out"}"#,
    );
    let overrides = WorkflowConfig {
        output_dir: Some("flag-out".into()),
        ..WorkflowConfig::default()
    };

    let dirs = resolve_workflow_dirs(Some(&config), overrides).unwrap();
    assert_eq!(
        dirs,
        WorkflowDirs {
            source_dir: "pdfs".into(),
            intermediate_dir: "raw".into(),
            output_dir: "flag-out".into(),
        }
    );
}

#[test]
fn workflow_dirs_name_what_is_missing() {
    let overrides = WorkflowConfig {
        source_dir: Some("pdfs".into()),
        ..WorkflowConfig::default()
    };
    let error = resolve_workflow_dirs(None, overrides).unwrap_err();
    assert_eq!(
        error.to_string(),
        "workflow directories not configured: intermediateDir, outputDir"
    );
}

#[test]
fn workflow_standardizes_intermediate_spreadsheets() {
    let dir = TempDir::new().unwrap();
    let dirs = WorkflowDirs {
        source_dir: dir.path().join("pdfs"),
        intermediate_dir: dir.path().join("raw"),
        output_dir: dir.path().join("final"),
    };
    fs::create_dir_all(&dirs.source_dir).unwrap();
    fs::create_dir_all(&dirs.intermediate_dir).unwrap();
    write_file(&dirs.intermediate_dir.join("SANSAAR.csv"), SANSAAR_CSV.as_bytes());

    let report = run_workflow(
        &dirs,
        &ExtractionOptions::default(),
        &StandardizeOptions::default(),
    )
    .unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].stage, Stage::Standardize);
    assert!(!report.has_errors());
    let output = dirs.output_dir.join("SANSAAR_FINAL.xlsx");
    assert_eq!(data_rows(&output).len(), 2);
}

#[test]
fn workflow_records_missing_source_dir() {
    let dir = TempDir::new().unwrap();
    let dirs = WorkflowDirs {
        source_dir: dir.path().join("absent"),
        intermediate_dir: dir.path().join("raw"),
        output_dir: dir.path().join("final"),
    };

    let report = run_workflow(
        &dirs,
        &ExtractionOptions::default(),
        &StandardizeOptions::default(),
    )
    .unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].stage, Stage::Extract);
    assert!(report.has_errors());
    assert!(dirs.intermediate_dir.is_dir());
}
