//! CLI argument definitions for the UOM audit.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "uom-audit",
    version,
    about = "Audit material unit-of-measure master data",
    long_about = "Audit material unit-of-measure master data.\n\n\
                  Runs the UOM rule catalogue against a material snapshot and\n\
                  writes one issue row per flagged (material, UOM) pair."
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
    /// Run the audit and write the issue report.
    Run(RunArgs),

    /// List the rule catalogue in evaluation order.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Material/UOM snapshot CSV.
    #[arg(long = "materials", value_name = "CSV")]
    pub materials: PathBuf,

    /// Duplicate-UPC listing CSV (upc, material_number, alt_uom).
    #[arg(long = "duplicate-upcs", value_name = "CSV")]
    pub duplicate_upcs: PathBuf,

    /// Report destination (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// TOML audit configuration.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Product category exempt from the missing-alternate-UOM rule (repeatable).
    #[arg(long = "exempt-category", value_name = "CATEGORY")]
    pub exempt_categories: Vec<String>,

    /// Rule to skip, by name (repeatable; see `uom-audit rules`).
    #[arg(long = "disable-rule", value_name = "RULE")]
    pub disabled_rules: Vec<String>,

    /// Evaluate rules in parallel.
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Discovery date stamped on every issue (default: today).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Do not print the per-rule summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// TOML audit configuration used to mark disabled rules.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
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
