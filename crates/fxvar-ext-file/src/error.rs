//! Error types for file loading.

use std::path::PathBuf;

use fxvar_core::ReferenceError;
use thiserror::Error;

/// A specialized Result type for file loading.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while reading reference data files.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV structure is broken.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A cell does not hold a number.
    #[error("row {row}, column '{column}': cannot parse '{value}' as a number")]
    Parse {
        /// 1-based data row.
        row: usize,
        /// Column header.
        column: String,
        /// Raw cell content.
        value: String,
    },

    /// The parsed data violates a reference-table invariant.
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}
