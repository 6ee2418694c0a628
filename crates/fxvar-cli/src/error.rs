//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid currency pair argument.
    #[error("Invalid currency pair: {0}")]
    InvalidPair(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// Configuration file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Reference data could not be loaded.
    #[error("Reference data error: {0}")]
    Data(#[from] fxvar_ext_file::FileError),

    /// Calculation error.
    #[error("{0}")]
    Risk(#[from] fxvar_risk::RiskError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
