//! CLI argument definitions for the rainfall/dengue join.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dengue-rain",
    version,
    about = "Join monthly rainfall with dengue case counts per state",
    long_about = "Join monthly rainfall with dengue case counts per state.\n\n\
                  Reads a pipe-delimited case file and a comma-delimited rainfall file,\n\
                  totals both per state and month, and writes the months present in both\n\
                  as semicolon-delimited rows."
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
    /// Run the join and write the output shards.
    Run(RunArgs),

    /// Print the column layouts of both inputs and the output.
    Schema,
}

#[derive(Parser, Default)]
pub struct RunArgs {
    /// TOML job configuration; flags below override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pipe-delimited dengue case file (default: casos_dengue.txt).
    #[arg(long = "cases", value_name = "PATH")]
    pub cases: Option<PathBuf>,

    /// Comma-delimited rainfall file (default: chuvas.csv).
    #[arg(long = "rain", value_name = "PATH")]
    pub rain: Option<PathBuf>,

    /// Output path prefix (default: resultado).
    #[arg(long = "output-prefix", value_name = "PREFIX")]
    pub output_prefix: Option<String>,

    /// Number of output shards (default: 1).
    #[arg(long = "shards", value_name = "N")]
    pub shards: Option<usize>,

    /// Worker threads (default: one per logical CPU).
    #[arg(long = "threads", value_name = "N")]
    pub threads: Option<usize>,

    /// Run every stage without writing output shards.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the run summary as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
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
