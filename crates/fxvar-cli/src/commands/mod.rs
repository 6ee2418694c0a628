//! CLI command implementations.

pub mod calc;
pub mod config;
pub mod pairs;

// Re-export submodules for convenience
pub use calc::CalcArgs;
pub use config::ConfigArgs;

use std::path::PathBuf;

use fxvar_core::CurrencyPair;
use fxvar_ext_file::ReferenceData;

use crate::cli::{Cli, OutputFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
///
/// The configuration file is parsed on demand, so commands that only locate
/// it keep working while it is missing or malformed.
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and hints.
    pub quiet: bool,
    /// Configuration file named on the command line.
    pub config_file: Option<PathBuf>,
    /// Configuration file in effect, if any location is known.
    pub config_path: Option<PathBuf>,
    /// Data directory override from the command line.
    pub data_dir: Option<PathBuf>,
}

impl Context {
    /// Builds the context from the global flags.
    pub fn new(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            quiet: cli.quiet,
            config_file: cli.config.clone(),
            config_path: cli.config.clone().or_else(CliConfig::default_path),
            data_dir: cli.data_dir.clone(),
        }
    }

    /// Loads and parses the configuration.
    pub fn config(&self) -> CliResult<CliConfig> {
        CliConfig::load(self.config_file.as_deref())
    }

    /// Loads the reference tables named by `config` and the data directory flag.
    pub fn reference_data(&self, config: &CliConfig) -> CliResult<ReferenceData> {
        config.reference_data(self.data_dir.as_deref())
    }
}

/// Parses a currency pair argument such as `eurusd`.
pub fn parse_pair(s: &str) -> CliResult<CurrencyPair> {
    CurrencyPair::new(s).map_err(|_| CliError::InvalidPair(s.to_string()))
}
