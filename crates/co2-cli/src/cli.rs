//! CLI argument definitions for the CO2 dashboard host.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "co2-dashboard",
    version,
    about = "CO2 emissions dashboard - cross-filter a country emissions dataset",
    long_about = "Load a country-level CO2 emissions CSV, apply filter and drill-down\n\
                  events, and print the resulting dashboard.\n\n\
                  Required columns: country, region, income_level, year, co2.\n\
                  Optional sector columns: coal_co2, oil_co2, gas_co2, cement_co2."
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
    /// List the year bounds and filter options of a dataset.
    Options(OptionsArgs),

    /// Apply filters from flags and print the dashboard.
    Show(ShowArgs),

    /// Apply a script of control events and print the dashboard.
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct OptionsArgs {
    /// Path to the emissions CSV.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,
}

/// Options shared by every command that renders the dashboard.
#[derive(Args)]
pub struct DashboardArgs {
    /// Path to the emissions CSV.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// TOML file with dashboard options.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of countries in the bar chart (overrides the config file).
    #[arg(long = "bar-top", value_name = "N")]
    pub bar_top: Option<usize>,

    /// Number of countries in the treemap (overrides the config file).
    #[arg(long = "treemap-top", value_name = "N")]
    pub treemap_top: Option<usize>,

    /// Output format for the final dashboard.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub dashboard: DashboardArgs,

    /// First year of the range.
    #[arg(long = "from", value_name = "YEAR", allow_negative_numbers = true)]
    pub from: Option<i32>,

    /// Last year of the range.
    #[arg(long = "to", value_name = "YEAR", allow_negative_numbers = true)]
    pub to: Option<i32>,

    /// Keep only these regions (repeatable).
    #[arg(long = "region", value_name = "REGION", conflicts_with = "no_regions")]
    pub regions: Vec<String>,

    /// Keep only these income levels (repeatable).
    #[arg(long = "income", value_name = "LEVEL", conflicts_with = "no_incomes")]
    pub incomes: Vec<String>,

    /// Uncheck every region.
    #[arg(long = "no-regions")]
    pub no_regions: bool,

    /// Uncheck every income level.
    #[arg(long = "no-incomes")]
    pub no_incomes: bool,

    /// Drill down on a country as if its bar was clicked.
    #[arg(long = "bar", value_name = "COUNTRY")]
    pub bar: Option<String>,

    /// Drill down on a country as if its treemap tile was clicked.
    #[arg(long = "treemap", value_name = "COUNTRY")]
    pub treemap: Option<String>,
}

#[derive(Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub dashboard: DashboardArgs,

    /// Event script: one `<control-id> [argument...]` per line, `#` for comments.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
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
