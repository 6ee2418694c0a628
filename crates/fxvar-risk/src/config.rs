//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RiskError, RiskResult};

/// Default account leverage applied to the margin amount.
pub const DEFAULT_LEVERAGE: f64 = 500.0;

/// Default projection horizon; produces rows for days `1..horizon`.
pub const DEFAULT_HORIZON_DAYS: u32 = 6;

/// One-tailed standard normal quantile at 95% confidence.
pub const Z_SCORE_95: f64 = 1.645;

/// One-tailed standard normal quantile at 99% confidence.
pub const Z_SCORE_99: f64 = 2.326;

/// Parameters shared by every VaR engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarConfig {
    /// Multiplier from margin amount to entry notional.
    #[serde(default = "default_leverage")]
    pub leverage: f64,

    /// Exclusive upper bound of the projected day range.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,

    /// Z-score used for standalone VaR at 95%.
    #[serde(default = "default_z_score_95")]
    pub z_score_95: f64,

    /// Z-score used for standalone VaR at 99%.
    #[serde(default = "default_z_score_99")]
    pub z_score_99: f64,
}

fn default_leverage() -> f64 {
    DEFAULT_LEVERAGE
}

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

fn default_z_score_95() -> f64 {
    Z_SCORE_95
}

fn default_z_score_99() -> f64 {
    Z_SCORE_99
}

impl Default for VarConfig {
    fn default() -> Self {
        Self {
            leverage: DEFAULT_LEVERAGE,
            horizon_days: DEFAULT_HORIZON_DAYS,
            z_score_95: Z_SCORE_95,
            z_score_99: Z_SCORE_99,
        }
    }
}

impl VarConfig {
    /// Sets the leverage.
    #[must_use]
    pub fn with_leverage(mut self, leverage: f64) -> Self {
        self.leverage = leverage;
        self
    }

    /// Sets the projection horizon.
    #[must_use]
    pub fn with_horizon_days(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// Checks that the configuration can drive a calculation.
    pub fn validate(&self) -> RiskResult<()> {
        if !(self.leverage.is_finite() && self.leverage > 0.0) {
            return Err(RiskError::InvalidConfig(format!(
                "leverage must be positive, got {}",
                self.leverage
            )));
        }
        if self.horizon_days < 2 {
            return Err(RiskError::InvalidConfig(format!(
                "horizon must be at least 2 days, got {}",
                self.horizon_days
            )));
        }
        for (name, z) in [("z_score_95", self.z_score_95), ("z_score_99", self.z_score_99)] {
            if !(z.is_finite() && z > 0.0) {
                return Err(RiskError::InvalidConfig(format!(
                    "{name} must be positive, got {z}"
                )));
            }
        }
        Ok(())
    }
}
