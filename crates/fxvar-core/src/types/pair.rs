//! Currency pair identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ReferenceError, ReferenceResult};

/// Number of characters in a pair code (base + quote, e.g. `EURUSD`).
pub const PAIR_CODE_LEN: usize = 6;

/// A currency pair such as `EURUSD`.
///
/// Codes are six ASCII alphanumerics, normalised to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyPair(String);

impl CurrencyPair {
    /// Creates a currency pair from its code.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::InvalidPair` if the code is not six ASCII
    /// alphanumeric characters.
    pub fn new(code: &str) -> ReferenceResult<Self> {
        let code = code.trim();
        if code.len() != PAIR_CODE_LEN {
            return Err(ReferenceError::invalid_pair(
                code,
                format!("expected {PAIR_CODE_LEN} characters"),
            ));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ReferenceError::invalid_pair(
                code,
                "only ASCII letters and digits are allowed",
            ));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the pair code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyPair {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyPair {
    type Error = ReferenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> Self {
        pair.0
    }
}
