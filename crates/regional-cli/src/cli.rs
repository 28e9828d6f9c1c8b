//! CLI argument definitions for the regional sales ETL.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use regional_cli::sources::parse_source_spec;
use regional_model::SourceDescriptor;

#[derive(Parser)]
#[command(
    name = "regional-sales",
    version,
    about = "Regional sales ETL - aggregate monthly sales per region",
    long_about = "Read one CSV export per region, clean and validate the records,\n\
                  and write monthly totals, means and counts per region as CSV or Parquet."
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
    /// Run the pipeline once.
    Run(RunArgs),

    /// List the sources discovered in the default layout.
    Sources(SourcesArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Base directory holding data/raw and data/processed.
    #[arg(long = "base-dir", value_name = "DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Pipeline configuration file (TOML). Takes precedence over --source.
    #[arg(long = "config", value_name = "FILE", conflicts_with = "sources")]
    pub config: Option<PathBuf>,

    /// Explicit source as NAME=PATH; repeat for several regions.
    #[arg(
        long = "source",
        value_name = "NAME=PATH",
        value_parser = parse_source_spec
    )]
    pub sources: Vec<SourceDescriptor>,

    /// Output file (default: <DIR>/data/processed/regional_sales.<ext>).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format tag: csv or parquet.
    #[arg(long = "format", value_name = "FORMAT")]
    pub format: Option<String>,

    /// Number of output rows to print after the run.
    #[arg(long = "preview", value_name = "N", default_value_t = 5)]
    pub preview: usize,
}

#[derive(Parser)]
pub struct SourcesArgs {
    /// Base directory holding data/raw.
    #[arg(long = "base-dir", value_name = "DIR", default_value = ".")]
    pub base_dir: PathBuf,
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
