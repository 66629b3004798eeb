//! Supplier catalog normalizer CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use vaya_cli::logging::{LogConfig, LogFormat, init_logging};
use vaya_cli::types::{FileReport, RunReport};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_batch_command, run_extract, run_process, run_profiles, run_standardize,
    run_workflow_command,
};
use crate::summary::{print_file_report, print_run_report};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Standardize(args) => finish_file(run_standardize(args)),
        Command::Extract(args) => finish_file(run_extract(args)),
        Command::Process(args) => finish_file(run_process(args)),
        Command::Batch(args) => finish_run(run_batch_command(args)),
        Command::Workflow(args) => finish_run(run_workflow_command(args)),
        Command::Profiles => {
            run_profiles();
            0
        }
    };
    std::process::exit(exit_code);
}

fn finish_file(result: anyhow::Result<FileReport>) -> i32 {
    match result {
        Ok(report) => {
            print_file_report(&report);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

fn finish_run(result: anyhow::Result<RunReport>) -> i32 {
    match result {
        Ok(report) => {
            print_run_report(&report);
            if report.has_errors() { 1 } else { 0 }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_timestamps = cli.log_timestamps;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
