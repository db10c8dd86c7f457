//! CLI argument definitions for the invoice flattener.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "invflat",
    version,
    about = "Invoice Flattener - Normalize nested invoice exports into a flat CSV table",
    long_about = "Flatten a serialized invoice collection into one row per line item.\n\n\
                  Rows carry derived totals, per-invoice percentages, and an\n\
                  expiration flag taken from a separate expired-id list."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Flatten an invoice collection and write the normalized CSV table.
    Flatten(FlattenArgs),

    /// List the item type-code table.
    Types,
}

#[derive(Parser)]
pub struct FlattenArgs {
    /// Path to the serialized invoice collection (JSON array).
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Path to the expired-invoice id list (comma-space separated).
    #[arg(value_name = "EXPIRED_FILE")]
    pub expired_file: PathBuf,

    /// Output CSV path (default: output.csv next to DATA_FILE).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Transform and summarize without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the first N output rows after the summary.
    #[arg(long = "preview", value_name = "ROWS")]
    pub preview: Option<usize>,
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
