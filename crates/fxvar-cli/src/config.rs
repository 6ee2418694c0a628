//! Configuration file handling.
//!
//! The file is optional TOML:
//!
//! ```toml
//! [data]
//! dir = "/srv/fxvar/data"
//! bid_change_file = "bid_change.csv"
//! stats_file = "W_SD.csv"
//!
//! [var]
//! leverage = 500.0
//! horizon_days = 6
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use fxvar_ext_file::{ReferenceData, DEFAULT_BID_CHANGE_FILE, DEFAULT_STATS_FILE};
use fxvar_risk::VarConfig;

use crate::error::{CliError, CliResult};

/// Data directory used when neither the flag nor the file names one.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Location of the reference tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPaths {
    /// Directory holding both tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Bid-change table, relative to `dir` unless absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_change_file: Option<PathBuf>,
    /// Statistics table, relative to `dir` unless absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats_file: Option<PathBuf>,
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Reference data location.
    #[serde(default)]
    pub data: DataPaths,
    /// Engine parameters.
    #[serde(default)]
    pub var: VarConfig,
}

impl CliConfig {
    /// Returns `<config dir>/fxvar/config.toml` for the current user.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fxvar").join("config.toml"))
    }

    /// Parses a configuration file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|reason| CliError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. The per-user default is optional and
    /// falls back to built-in defaults when absent.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading configuration");
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading configuration");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Resolves the two table paths, giving `data_dir` precedence over the file.
    pub fn table_paths(&self, data_dir: Option<&Path>) -> (PathBuf, PathBuf) {
        let dir = data_dir
            .map(Path::to_path_buf)
            .or_else(|| self.data.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let resolve = |file: &Option<PathBuf>, default: &str| match file {
            Some(file) => dir.join(file),
            None => dir.join(default),
        };
        (
            resolve(&self.data.bid_change_file, DEFAULT_BID_CHANGE_FILE),
            resolve(&self.data.stats_file, DEFAULT_STATS_FILE),
        )
    }

    /// Loads both reference tables.
    pub fn reference_data(&self, data_dir: Option<&Path>) -> CliResult<ReferenceData> {
        let (bid_changes, stats) = self.table_paths(data_dir);
        debug!(
            bid_changes = %bid_changes.display(),
            stats = %stats.display(),
            "loading reference data"
        );
        Ok(ReferenceData::load_files(bid_changes, stats)?)
    }
}
