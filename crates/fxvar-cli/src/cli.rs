//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CalcArgs, ConfigArgs};

/// FxVar - Value-at-Risk for two-pair FX margin positions
#[derive(Parser)]
#[command(name = "fxvar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding bid_change.csv and W_SD.csv
    #[arg(long, global = true, env = "FXVAR_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "FXVAR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate standalone and portfolio VaR for a two-pair position
    Calc(CalcArgs),

    /// List currency pairs and supported pair combinations
    Pairs,

    /// Inspect the configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
