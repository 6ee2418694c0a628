//! Value at Risk (VaR) calculations.
//!
//! VaR estimates the potential loss over a time horizon at a given
//! confidence level. Daily figures are projected to longer horizons with the
//! square-root-of-time rule, which assumes independent, identically
//! distributed daily returns.

mod historical;
mod normal;
mod standalone;

pub use historical::*;
pub use normal::*;
pub use standalone::*;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::VarConfig;

/// Supported confidence levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// 95% confidence.
    Pct95,
    /// 99% confidence.
    Pct99,
}

impl ConfidenceLevel {
    /// Both levels, in reporting order.
    pub const ALL: [ConfidenceLevel; 2] = [ConfidenceLevel::Pct95, ConfidenceLevel::Pct99];

    /// Confidence as a fraction (0.95 or 0.99).
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            ConfidenceLevel::Pct95 => 0.95,
            ConfidenceLevel::Pct99 => 0.99,
        }
    }

    /// Probability of the loss tail for a long exposure (0.05 or 0.01).
    #[must_use]
    pub fn lower_tail(self) -> f64 {
        match self {
            ConfidenceLevel::Pct95 => 0.05,
            ConfidenceLevel::Pct99 => 0.01,
        }
    }

    /// Probability of the loss tail for a short exposure (0.95 or 0.99).
    #[must_use]
    pub fn upper_tail(self) -> f64 {
        self.value()
    }

    /// Configured one-tailed z-score for this level.
    #[must_use]
    pub fn z_score(self, config: &VarConfig) -> f64 {
        match self {
            ConfidenceLevel::Pct95 => config.z_score_95,
            ConfidenceLevel::Pct99 => config.z_score_99,
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::Pct95 => f.write_str("95%"),
            ConfidenceLevel::Pct99 => f.write_str("99%"),
        }
    }
}

/// VaR calculation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VarMethod {
    /// Historical simulation on the combined series.
    Historical,
    /// Per-leg quantiles combined through the correlation.
    Normal,
}

impl fmt::Display for VarMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarMethod::Historical => f.write_str("Historical"),
            VarMethod::Normal => f.write_str("Normal Distribution"),
        }
    }
}

/// Projected loss for one day of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Holding period in days.
    pub day: u32,
    /// Dollar VaR of leg A (normal method only).
    pub leg_a: Option<f64>,
    /// Dollar VaR of leg B (normal method only).
    pub leg_b: Option<f64>,
    /// Dollar VaR of the position.
    pub portfolio: f64,
    /// Portfolio VaR as a percentage of account equity.
    pub loss_pct_equity: f64,
}

/// Scales a one-day amount to a `day`-day holding period.
#[must_use]
pub fn scale_to_day(daily_amount: f64, day: u32) -> f64 {
    daily_amount * f64::from(day).sqrt()
}

/// Loss as a percentage of account equity.
#[must_use]
pub fn loss_pct_of_equity(amount: f64, account: f64) -> f64 {
    amount / account * 100.0
}

/// Days covered by a horizon: `1..horizon_days`.
pub fn projection_days(horizon_days: u32) -> impl Iterator<Item = u32> {
    1..horizon_days
}
