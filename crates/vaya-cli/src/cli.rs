//! CLI argument definitions for the catalog pipeline.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use vaya_model::options::DEFAULT_MIN_FIELDS;
use vaya_model::{CatalogType, ExtractionMethod, ExtractionOptions, OutputFormat};

#[derive(Parser)]
#[command(
    name = "vaya",
    version,
    about = "Supplier catalog normalizer - convert price lists to the VAYA schema",
    long_about = "Convert supplier price catalogs (Excel, CSV, PDF) into the 17-column\n\
                  VAYA canonical schema with GST-inclusive prices.\n\n\
                  Known suppliers: SANSAAR, FF_A_dress, FABRIZIO."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Standardize a spreadsheet or CSV catalog.
    Standardize(StandardizeArgs),

    /// Extract a PDF price list into a raw workbook.
    Extract(ExtractArgs),

    /// Standardize any catalog; PDFs are extracted first.
    Process(ProcessArgs),

    /// Process every catalog in a directory.
    Batch(BatchArgs),

    /// Run the PDF -> intermediate -> final workflow.
    Workflow(WorkflowArgs),

    /// List the known supplier profiles.
    Profiles,
}

#[derive(Parser)]
pub struct StandardizeArgs {
    /// Spreadsheet or CSV catalog.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <INPUT stem>_STANDARDIZED.<format>).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "xlsx")]
    pub format: OutputFormatArg,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// PDF price list.
    #[arg(value_name = "PDF")]
    pub input: PathBuf,

    /// Output workbook (default: <PDF stem>_EXTRACTED.xlsx).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub extraction: ExtractionArgs,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Spreadsheet, CSV or PDF catalog.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output workbook (default: <INPUT stem>_STANDARDIZED.xlsx).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub extraction: ExtractionArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Directory containing catalogs.
    #[arg(value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Output directory (default: <DIR>/standardized_catalogs).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub extraction: ExtractionArgs,
}

#[derive(Parser)]
pub struct WorkflowArgs {
    /// JSON file with sourceDir, intermediateDir and outputDir.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the source PDFs.
    #[arg(long = "source-dir", value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Directory for raw extracted workbooks.
    #[arg(long = "intermediate-dir", value_name = "DIR")]
    pub intermediate_dir: Option<PathBuf>,

    /// Directory for standardized workbooks.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub extraction: ExtractionArgs,
}

/// PDF extraction flags shared by several subcommands.
#[derive(Args, Clone, Copy)]
pub struct ExtractionArgs {
    /// PDF extraction strategy.
    #[arg(long = "method", value_enum, default_value = "auto")]
    pub method: MethodArg,

    /// Minimum captured fields for a PDF line to count as a product row.
    #[arg(long = "min-fields", value_name = "N", default_value_t = DEFAULT_MIN_FIELDS)]
    pub min_fields: usize,
}

impl ExtractionArgs {
    pub fn options(self) -> ExtractionOptions {
        ExtractionOptions::new()
            .with_method(self.method.into())
            .with_min_fields(self.min_fields)
    }
}

#[derive(Args, Clone, Copy)]
pub struct CatalogArgs {
    /// Skip detection and use this supplier profile.
    #[arg(long = "catalog-type", value_name = "TYPE", value_parser = CatalogType::from_str)]
    pub catalog_type: Option<CatalogType>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Xlsx,
    Csv,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Xlsx => Self::Xlsx,
            OutputFormatArg::Csv => Self::Csv,
        }
    }
}

/// CLI extraction method choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Auto,
    Profile,
    Generic,
}

impl From<MethodArg> for ExtractionMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Auto => Self::Auto,
            MethodArg::Profile => Self::Profile,
            MethodArg::Generic => Self::Generic,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_process_flags() {
        let cli = Cli::parse_from([
            "vaya",
            "process",
            "list.pdf",
            "--method",
            "profile",
            "--min-fields",
            "4",
            "--catalog-type",
            "fabrizio",
        ]);
        let Command::Process(args) = cli.command else {
            panic!("expected process");
        };
        let options = args.extraction.options();
        assert_eq!(options.method, ExtractionMethod::Profile);
        assert_eq!(options.min_fields, 4);
        assert_eq!(args.catalog.catalog_type, Some(CatalogType::Fabrizio));
    }

    #[test]
    fn log_flags_are_global() {
        let cli = Cli::parse_from([
            "vaya",
            "profiles",
            "--log-timestamps",
            "--log-format",
            "compact",
        ]);
        assert!(cli.log_timestamps);
        assert!(matches!(cli.log_format, LogFormatArg::Compact));
        assert!(!Cli::parse_from(["vaya", "profiles"]).log_timestamps);
    }

    #[test]
    fn extraction_defaults() {
        let cli = Cli::parse_from(["vaya", "extract", "list.pdf"]);
        let Command::Extract(args) = cli.command else {
            panic!("expected extract");
        };
        assert_eq!(args.extraction.options(), ExtractionOptions::default());
    }
}
