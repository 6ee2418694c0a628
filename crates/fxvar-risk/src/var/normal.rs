//! Normal-distribution VaR.
//!
//! Each leg gets its own tail quantile from its raw daily changes. The leg
//! dollar VaRs are then aggregated with the variance-covariance formula
//! `sqrt(a² + b² + 2ab·ρ)`.

use fxvar_core::Direction;
use fxvar_math::quantile;
use tracing::debug;

use super::{loss_pct_of_equity, projection_days, scale_to_day, ConfidenceLevel, ProjectionRow};
use crate::error::RiskResult;

/// Loss-relevant quantile of one pair's daily changes.
///
/// A long leg loses in the lower tail (5th / 1st percentile); a short leg
/// loses in the upper tail (95th / 99th percentile).
pub fn leg_quantile(
    changes: &[f64],
    direction: Direction,
    confidence: ConfidenceLevel,
) -> RiskResult<f64> {
    let p = match direction {
        Direction::Long => confidence.lower_tail(),
        Direction::Short => confidence.upper_tail(),
    };
    let q = quantile(changes, p)?;
    debug!("{} leg quantile at p={}: {:.6}", direction, p, q);
    Ok(q)
}

/// One-day dollar VaR of a leg: `amount_entry * q * weight`, with the weight
/// negated for a short leg.
#[must_use]
pub fn leg_dollar_var(amount_entry: f64, q: f64, weight: f64, direction: Direction) -> f64 {
    amount_entry * q * (direction.sign() * weight)
}

/// Aggregates two leg VaRs into a portfolio VaR.
///
/// The magnitude is reported as a loss: a non-negative magnitude is negated,
/// a negative one is returned as is. A magnitude of zero stays zero.
#[must_use]
pub fn portfolio_var(var_a: f64, var_b: f64, correl: f64) -> f64 {
    // rounding can leave a tiny negative radicand when |correl| == 1
    let radicand = (var_a * var_a + var_b * var_b + 2.0 * var_a * var_b * correl).max(0.0);
    let magnitude = radicand.sqrt();
    if magnitude >= 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

/// One-day normal VaR of both legs and the portfolio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalDailyVar {
    /// Leg A dollar VaR.
    pub leg_a: f64,
    /// Leg B dollar VaR.
    pub leg_b: f64,
    /// Portfolio dollar VaR.
    pub portfolio: f64,
}

impl NormalDailyVar {
    /// Combines the two leg VaRs through the correlation.
    #[must_use]
    pub fn new(leg_a: f64, leg_b: f64, correl: f64) -> Self {
        Self {
            leg_a,
            leg_b,
            portfolio: portfolio_var(leg_a, leg_b, correl),
        }
    }
}

/// Projects normal VaR over the horizon.
///
/// Both legs and the portfolio scale with `sqrt(day)`; the equity
/// percentage follows the portfolio figure.
#[must_use]
pub fn normal_projection(daily: NormalDailyVar, account: f64, horizon_days: u32) -> Vec<ProjectionRow> {
    projection_days(horizon_days)
        .map(|day| {
            let portfolio = scale_to_day(daily.portfolio, day);
            ProjectionRow {
                day,
                leg_a: Some(scale_to_day(daily.leg_a, day)),
                leg_b: Some(scale_to_day(daily.leg_b, day)),
                portfolio,
                loss_pct_equity: loss_pct_of_equity(portfolio, account),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CHANGES: [f64; 10] = [
        0.004, -0.010, 0.002, 0.006, -0.004, 0.008, -0.002, 0.000, 0.010, -0.006,
    ];

    #[test]
    fn test_leg_quantile_tails() {
        let long_95 = leg_quantile(&CHANGES, Direction::Long, ConfidenceLevel::Pct95).unwrap();
        let long_99 = leg_quantile(&CHANGES, Direction::Long, ConfidenceLevel::Pct99).unwrap();
        let short_95 = leg_quantile(&CHANGES, Direction::Short, ConfidenceLevel::Pct95).unwrap();
        let short_99 = leg_quantile(&CHANGES, Direction::Short, ConfidenceLevel::Pct99).unwrap();

        assert_relative_eq!(long_95, -0.0082, epsilon = 1e-12);
        assert_relative_eq!(long_99, -0.00964, epsilon = 1e-12);
        assert_relative_eq!(short_95, 0.0091, epsilon = 1e-12);
        assert_relative_eq!(short_99, 0.00982, epsilon = 1e-12);
    }

    #[test]
    fn test_leg_dollar_var_sign() {
        assert_relative_eq!(leg_dollar_var(100_000.0, -0.0082, 0.5, Direction::Long), -410.0, epsilon = 1e-9);
        assert_relative_eq!(leg_dollar_var(100_000.0, 0.0091, 0.5, Direction::Short), -455.0, epsilon = 1e-9);
    }

    #[test]
    fn test_portfolio_var_uncorrelated() {
        assert_relative_eq!(portfolio_var(5.0, 3.0, 0.0), -(34.0f64).sqrt());
        assert_relative_eq!(portfolio_var(5.0, 3.0, 0.0), -5.830_951_894_845_301, epsilon = 1e-12);
    }

    #[test]
    fn test_portfolio_var_negative_legs() {
        assert_relative_eq!(portfolio_var(-5.0, -3.0, 0.0), -(34.0f64).sqrt());
    }

    #[test]
    fn test_portfolio_var_perfect_correlation() {
        assert_relative_eq!(portfolio_var(-4.0, -3.0, 1.0), -7.0, epsilon = 1e-12);
        assert_relative_eq!(portfolio_var(-4.0, -3.0, -1.0), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_portfolio_var_zero() {
        let v = portfolio_var(0.0, 0.0, 0.5);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_normal_projection() {
        let daily = NormalDailyVar::new(-300.0, -400.0, 0.0);
        assert_relative_eq!(daily.portfolio, -500.0);

        let rows = normal_projection(daily, 10_000.0, 6);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[3].day, 4);
        assert_relative_eq!(rows[3].leg_a.unwrap(), -600.0);
        assert_relative_eq!(rows[3].leg_b.unwrap(), -800.0);
        assert_relative_eq!(rows[3].portfolio, -1000.0);
        assert_relative_eq!(rows[3].loss_pct_equity, -10.0);
    }
}
