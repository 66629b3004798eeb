//! File-level operations behind the CLI subcommands.
//!
//! Single-file operations return `Err` on failure. Batch and workflow runs
//! turn each file's failure into a failed [`FileReport`] and carry on.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{error, info, info_span, warn};

use vaya_ingest::{CatalogFormat, DiscoveredFile, discover_catalog_files, read_catalog_with};
use vaya_model::{ExtractionOptions, OutputFormat, RawTable, WorkflowConfig};
use vaya_output::{
    FINAL_SUFFIX, STANDARDIZED_SUFFIX, output_file_name, write_raw_workbook, write_standardized,
};
use vaya_pdf::extract_pdf_file;
use vaya_transform::{StandardizeOptions, standardize};

use crate::types::{FileReport, RunReport, Stage, WorkflowDirs};

/// Default batch output directory, created inside the input directory.
pub const BATCH_OUTPUT_DIR: &str = "standardized_catalogs";

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Standardizes sheets already read from `input` and writes them.
fn write_sheets(
    input: &Path,
    sheets: Vec<(String, RawTable)>,
    output: &Path,
    format: OutputFormat,
    options: &StandardizeOptions,
) -> Result<FileReport> {
    let standardized = standardize(sheets, &file_name(input), options);
    if standardized.is_empty() {
        bail!("no data sheets found in {}", input.display());
    }
    write_standardized(output, &standardized, format)
        .with_context(|| format!("write {}", output.display()))?;
    let rows = standardized.iter().map(|sheet| sheet.table.len()).sum();
    info!(input = %input.display(), output = %output.display(), rows, "standardized catalog");
    Ok(FileReport::success(input, Stage::Standardize, output, rows).with_sheets(&standardized))
}

/// Standardizes a spreadsheet or CSV catalog.
pub fn standardize_file(
    input: &Path,
    output: &Path,
    format: OutputFormat,
    options: &StandardizeOptions,
) -> Result<FileReport> {
    if CatalogFormat::from_path(input) == Some(CatalogFormat::Pdf) {
        bail!(
            "{} is a PDF; use `extract` or `process` instead",
            input.display()
        );
    }
    let sheets = read_catalog_with(input, &ExtractionOptions::default())
        .with_context(|| format!("read {}", input.display()))?;
    write_sheets(input, sheets, output, format, options)
}

/// Extracts a PDF into a raw single-sheet workbook.
pub fn extract_file(
    input: &Path,
    output: &Path,
    options: &ExtractionOptions,
) -> Result<FileReport> {
    let table =
        extract_pdf_file(input, options).with_context(|| format!("extract {}", input.display()))?;
    write_raw_workbook(output, &table).with_context(|| format!("write {}", output.display()))?;
    info!(
        input = %input.display(),
        output = %output.display(),
        rows = table.row_count(),
        "extracted PDF"
    );
    Ok(FileReport::success(
        input,
        Stage::Extract,
        output,
        table.row_count(),
    ))
}

/// Standardizes any supported catalog into a workbook; PDFs are extracted
/// in memory first and classified by the PDF's file name.
pub fn process_file(
    input: &Path,
    output: &Path,
    extraction: &ExtractionOptions,
    options: &StandardizeOptions,
) -> Result<FileReport> {
    let sheets =
        read_catalog_with(input, extraction).with_context(|| format!("read {}", input.display()))?;
    write_sheets(input, sheets, output, OutputFormat::Xlsx, options)
}

/// Processes every catalog in `input_dir`, PDFs first.
pub fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    extraction: &ExtractionOptions,
    options: &StandardizeOptions,
) -> Result<RunReport> {
    let span = info_span!("batch", input_dir = %input_dir.display());
    let _guard = span.enter();

    let mut files = discover_catalog_files(input_dir)
        .with_context(|| format!("scan {}", input_dir.display()))?;
    files.sort_by_key(|file| file.format);
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    info!(files = files.len(), output_dir = %output_dir.display(), "starting batch");

    let mut report = RunReport::new(output_dir);
    let mut claimed = HashSet::new();
    for file in &files {
        let output = output_dir.join(output_file_name(
            &file.path,
            STANDARDIZED_SUFFIX,
            OutputFormat::Xlsx,
        ));
        let outcome = claim_output(&mut claimed, output)
            .and_then(|output| process_file(&file.path, &output, extraction, options));
        report
            .files
            .push(record_outcome(file, Stage::Standardize, outcome));
    }
    Ok(report)
}

/// Reserves `output` for the current input.
///
/// Inputs that differ only by extension share an output name; the first one
/// processed keeps it and later ones fail instead of overwriting it.
fn claim_output(claimed: &mut HashSet<PathBuf>, output: PathBuf) -> Result<PathBuf> {
    if !claimed.insert(output.clone()) {
        bail!(
            "output {} already written by another input in this run",
            output.display()
        );
    }
    Ok(output)
}

fn record_outcome(file: &DiscoveredFile, stage: Stage, outcome: Result<FileReport>) -> FileReport {
    outcome.unwrap_or_else(|err| {
        let message = format!("{err:#}");
        error!(file = %file.path.display(), stage = %stage, error = %message, "file failed");
        FileReport::failure(&file.path, stage, &err)
    })
}

/// Reads the workflow config file (if any) and applies CLI overrides.
pub fn resolve_workflow_dirs(
    config_file: Option<&Path>,
    overrides: WorkflowConfig,
) -> Result<WorkflowDirs> {
    let from_file = match config_file {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            serde_json::from_str::<WorkflowConfig>(&text)
                .with_context(|| format!("parse {}", path.display()))?
        }
        None => WorkflowConfig::default(),
    };
    let merged = overrides.merged_with(from_file);
    let missing = merged.missing();
    match merged {
        WorkflowConfig {
            source_dir: Some(source_dir),
            intermediate_dir: Some(intermediate_dir),
            output_dir: Some(output_dir),
        } => Ok(WorkflowDirs {
            source_dir,
            intermediate_dir,
            output_dir,
        }),
        _ => Err(anyhow!(
            "workflow directories not configured: {}",
            missing.join(", ")
        )),
    }
}

/// Two-stage workflow: source PDFs to intermediate workbooks, then every
/// tabular file in the intermediate directory to `<stem>_FINAL.xlsx`.
pub fn run_workflow(
    dirs: &WorkflowDirs,
    extraction: &ExtractionOptions,
    options: &StandardizeOptions,
) -> Result<RunReport> {
    let span = info_span!("workflow");
    let _guard = span.enter();

    for dir in [&dirs.intermediate_dir, &dirs.output_dir] {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let mut report = RunReport::new(&dirs.output_dir);

    match discover_catalog_files(&dirs.source_dir) {
        Ok(files) => {
            let pdfs: Vec<&DiscoveredFile> = files
                .iter()
                .filter(|file| file.format == CatalogFormat::Pdf)
                .collect();
            if pdfs.is_empty() {
                warn!(source_dir = %dirs.source_dir.display(), "no PDF files in source directory");
            }
            let mut claimed = HashSet::new();
            for file in pdfs {
                let output = dirs.intermediate_dir.join(intermediate_name(&file.path));
                let outcome = claim_output(&mut claimed, output)
                    .and_then(|output| extract_file(&file.path, &output, extraction));
                report.files.push(record_outcome(file, Stage::Extract, outcome));
            }
        }
        Err(err) => {
            let err = anyhow::Error::new(err);
            error!(error = %err, "source directory unavailable");
            report
                .files
                .push(FileReport::failure(&dirs.source_dir, Stage::Extract, &err));
        }
    }

    let tabular: Vec<DiscoveredFile> = discover_catalog_files(&dirs.intermediate_dir)
        .with_context(|| format!("scan {}", dirs.intermediate_dir.display()))?
        .into_iter()
        .filter(|file| file.format.is_tabular())
        .collect();
    if tabular.is_empty() {
        warn!(intermediate_dir = %dirs.intermediate_dir.display(), "no spreadsheets to standardize");
    }
    let mut claimed = HashSet::new();
    for file in &tabular {
        let output = dirs
            .output_dir
            .join(output_file_name(&file.path, FINAL_SUFFIX, OutputFormat::Xlsx));
        let outcome = claim_output(&mut claimed, output)
            .and_then(|output| process_file(&file.path, &output, extraction, options));
        report
            .files
            .push(record_outcome(file, Stage::Standardize, outcome));
    }
    Ok(report)
}

/// `<stem>.xlsx`; the stem carries the supplier name into detection.
fn intermediate_name(pdf: &Path) -> PathBuf {
    let stem = pdf
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    PathBuf::from(format!("{stem}.{}", OutputFormat::Xlsx.extension()))
}

/// Output path next to `input` with the given suffix.
pub fn default_output(input: &Path, suffix: &str, format: OutputFormat) -> PathBuf {
    input.with_file_name(output_file_name(input, suffix, format))
}
