//! Error types for reference data access.
//!
//! Every failure here is a data problem: either the caller asked for a pair
//! or combination the reference tables do not know, or the tables themselves
//! are malformed.

use thiserror::Error;

/// A specialized Result type for reference data operations.
pub type ReferenceResult<T> = Result<T, ReferenceError>;

/// Errors raised while building or querying the reference tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReferenceError {
    /// A currency pair code is malformed.
    #[error("Invalid currency pair '{code}': {reason}")]
    InvalidPair {
        /// The offending code.
        code: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The pair is not a column of the bid-change table.
    #[error("Unknown currency pair: {0}")]
    UnknownPair(String),

    /// Neither ordering of the two pairs exists in the statistics table.
    #[error("Unsupported pair combination: {pair_a}, {pair_b}")]
    UnsupportedCombination {
        /// First pair as requested.
        pair_a: String,
        /// Second pair as requested.
        pair_b: String,
    },

    /// A combination key could not be parsed.
    #[error("Invalid combination key '{0}': expected \"A, B\"")]
    InvalidCombinationKey(String),

    /// A statistics row holds values that cannot be used.
    #[error("Invalid statistics for {combination}: {reason}")]
    InvalidStats {
        /// Combination key of the row.
        combination: String,
        /// Description of the problem.
        reason: String,
    },

    /// Daily change columns do not share the same time axis.
    #[error("Misaligned series for {pair}: expected {expected} rows, got {actual}")]
    MisalignedSeries {
        /// Pair whose column has the wrong length.
        pair: String,
        /// Length of the first column.
        expected: usize,
        /// Length of this column.
        actual: usize,
    },

    /// The same pair or combination appears twice.
    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

impl ReferenceError {
    /// Creates an invalid pair error.
    #[must_use]
    pub fn invalid_pair(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPair {
            code: code.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid statistics error.
    #[must_use]
    pub fn invalid_stats(combination: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidStats {
            combination: combination.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the error means the requested data does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownPair(_) | Self::UnsupportedCombination { .. }
        )
    }
}
