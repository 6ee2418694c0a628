//! Historical VaR calculation.

use fxvar_math::quantile;
use tracing::debug;

use super::{loss_pct_of_equity, projection_days, scale_to_day, ConfidenceLevel, ProjectionRow};
use crate::error::RiskResult;

/// Empirical VaR quantile of a combined daily series.
///
/// Losses are negative returns, so the lower tail is used: the 5th
/// percentile at 95% and the 1st percentile at 99%.
///
/// # Arguments
///
/// * `combined` - Combined daily returns (as decimals, e.g., -0.01 for -1%)
/// * `confidence` - Confidence level
///
/// # Returns
///
/// The signed quantile, typically negative.
pub fn historical_quantile(combined: &[f64], confidence: ConfidenceLevel) -> RiskResult<f64> {
    let q = quantile(combined, confidence.lower_tail())?;
    debug!("historical {} quantile: {:.6}", confidence, q);
    Ok(q)
}

/// Projects historical VaR over the horizon.
///
/// Day `i` loses `amount_entry * q * sqrt(i)`.
#[must_use]
pub fn historical_projection(
    amount_entry: f64,
    q: f64,
    account: f64,
    horizon_days: u32,
) -> Vec<ProjectionRow> {
    let daily = amount_entry * q;
    projection_days(horizon_days)
        .map(|day| {
            let portfolio = scale_to_day(daily, day);
            ProjectionRow {
                day,
                leg_a: None,
                leg_b: None,
                portfolio,
                loss_pct_equity: loss_pct_of_equity(portfolio, account),
            }
        })
        .collect()
}
