//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use medclean_ingest::DEFAULT_METADATA_FILE;

#[derive(Parser)]
#[command(
    name = "medclean",
    version,
    about = "Rename medical data columns and label categorical codes",
    long_about = "Clean tabular medical data using a JSON metadata file.\n\n\
                  Columns listed under `column_mappings` are renamed, and categorical\n\
                  codes are rewritten as \"code: description\" labels."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Rename columns and label categorical codes in a CSV file.
    Clean(CleanArgs),

    /// List the column mappings in a metadata file.
    Mappings(MetadataArgs),

    /// Check a metadata file for suspicious entries.
    Check(MetadataArgs),
}

#[derive(Args)]
pub struct MetadataArgs {
    /// Path to the JSON metadata file.
    #[arg(long = "metadata", value_name = "PATH", default_value = DEFAULT_METADATA_FILE)]
    pub metadata: PathBuf,
}

#[derive(Args)]
pub struct CleanArgs {
    /// CSV file to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the cleaned CSV.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub metadata: MetadataArgs,

    /// Only rename columns; leave categorical codes as they are.
    #[arg(long = "rename-only")]
    pub rename_only: bool,
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
