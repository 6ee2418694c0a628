//! Standalone parametric VaR of a single pair.

use serde::{Deserialize, Serialize};

use super::ConfidenceLevel;
use crate::config::VarConfig;

/// One-day VaR of a single pair at both confidence levels.
///
/// Ignores direction and correlation; amounts are positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandaloneVar {
    /// VaR at 95% confidence.
    pub var_95: f64,
    /// VaR at 99% confidence.
    pub var_99: f64,
}

impl StandaloneVar {
    /// Returns the VaR for a confidence level.
    #[must_use]
    pub fn at(&self, confidence: ConfidenceLevel) -> f64 {
        match confidence {
            ConfidenceLevel::Pct95 => self.var_95,
            ConfidenceLevel::Pct99 => self.var_99,
        }
    }
}

/// Computes `amount_entry * daily_sd * z` for both configured z-scores.
#[must_use]
pub fn standalone_var(amount_entry: f64, daily_sd: f64, config: &VarConfig) -> StandaloneVar {
    StandaloneVar {
        var_95: amount_entry * daily_sd * ConfidenceLevel::Pct95.z_score(config),
        var_99: amount_entry * daily_sd * ConfidenceLevel::Pct99.z_score(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standalone_var() {
        let var = standalone_var(100_000.0, 0.006, &VarConfig::default());
        assert_relative_eq!(var.var_95, 987.0, epsilon = 1e-9);
        assert_relative_eq!(var.var_99, 1395.6, epsilon = 1e-9);
        assert_relative_eq!(var.at(ConfidenceLevel::Pct99), var.var_99);
    }

    #[test]
    fn test_custom_z_scores() {
        let config = VarConfig {
            z_score_95: 2.0,
            z_score_99: 3.0,
            ..VarConfig::default()
        };
        let var = standalone_var(1_000.0, 0.01, &config);
        assert_relative_eq!(var.var_95, 20.0, epsilon = 1e-12);
        assert_relative_eq!(var.var_99, 30.0, epsilon = 1e-12);
    }
}
