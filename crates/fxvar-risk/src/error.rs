//! Error types for VaR calculations.

use fxvar_core::ReferenceError;
use fxvar_math::MathError;
use thiserror::Error;

/// A specialized Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during VaR calculations.
#[derive(Debug, Error)]
pub enum RiskError {
    /// The request is invalid and must be corrected by the user.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Reference data is missing or malformed.
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// A statistical routine failed.
    #[error("calculation failed: {0}")]
    Math(#[from] MathError),

    /// Engine configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RiskError {
    /// Returns true for errors the user can fix by changing the request.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if the requested pair or combination is not in the reference data.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Reference(err) if err.is_not_found())
    }
}
