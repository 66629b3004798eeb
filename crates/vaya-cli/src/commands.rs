use std::path::Path;

use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use vaya_cli::pipeline::{
    BATCH_OUTPUT_DIR, default_output, extract_file, process_file, resolve_workflow_dirs,
    run_batch, run_workflow, standardize_file,
};
use vaya_cli::types::{FileReport, RunReport};
use vaya_map::profiles;
use vaya_model::{OutputFormat, WorkflowConfig};
use vaya_output::{EXTRACTED_SUFFIX, STANDARDIZED_SUFFIX};
use vaya_transform::StandardizeOptions;

use crate::cli::{BatchArgs, CatalogArgs, ExtractArgs, ProcessArgs, StandardizeArgs, WorkflowArgs};
use crate::summary::{apply_table_style, header_cell};

fn standardize_options(args: CatalogArgs) -> StandardizeOptions {
    StandardizeOptions {
        catalog_type: args.catalog_type,
    }
}

fn span_for(command: &'static str, input: &Path) -> tracing::Span {
    info_span!("command", command, input = %input.display())
}

pub fn run_standardize(args: &StandardizeArgs) -> Result<FileReport> {
    let _guard = span_for("standardize", &args.input).entered();
    let format = OutputFormat::from(args.format);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, STANDARDIZED_SUFFIX, format));
    standardize_file(&args.input, &output, format, &standardize_options(args.catalog))
}

pub fn run_extract(args: &ExtractArgs) -> Result<FileReport> {
    let _guard = span_for("extract", &args.input).entered();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, EXTRACTED_SUFFIX, OutputFormat::Xlsx));
    extract_file(&args.input, &output, &args.extraction.options())
}

pub fn run_process(args: &ProcessArgs) -> Result<FileReport> {
    let _guard = span_for("process", &args.input).entered();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, STANDARDIZED_SUFFIX, OutputFormat::Xlsx));
    process_file(
        &args.input,
        &output,
        &args.extraction.options(),
        &standardize_options(args.catalog),
    )
}

pub fn run_batch_command(args: &BatchArgs) -> Result<RunReport> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.input_dir.join(BATCH_OUTPUT_DIR));
    run_batch(
        &args.input_dir,
        &output_dir,
        &args.extraction.options(),
        &StandardizeOptions::default(),
    )
}

pub fn run_workflow_command(args: &WorkflowArgs) -> Result<RunReport> {
    let overrides = WorkflowConfig {
        source_dir: args.source_dir.clone(),
        intermediate_dir: args.intermediate_dir.clone(),
        output_dir: args.output_dir.clone(),
    };
    let dirs = resolve_workflow_dirs(args.config.as_deref(), overrides)?;
    run_workflow(&dirs, &args.extraction.options(), &StandardizeOptions::default())
}

pub fn run_profiles() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Profile"),
        header_cell("Filename signals"),
        header_cell("Source column"),
        header_cell("Canonical field"),
    ]);
    apply_table_style(&mut table);
    for profile in profiles() {
        for (index, (source, field)) in profile.columns.iter().enumerate() {
            let (id, signals) = if index == 0 {
                (profile.id().to_string(), profile.filename_signatures.join(", "))
            } else {
                (String::new(), String::new())
            };
            table.add_row(vec![
                id,
                signals,
                format!("{source:?}"),
                field.header().to_string(),
            ]);
        }
    }
    println!("{table}");
}
