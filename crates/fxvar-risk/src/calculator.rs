//! Integrated VaR calculator for a two-pair margin position.
//!
//! `VarCalculator` is the single entry point of the crate: it validates a
//! [`VarRequest`], looks up the pair statistics, sizes the position and runs
//! the selected engine at both confidence levels.
//!
//! # Example
//!
//! ```ignore
//! use fxvar_risk::prelude::*;
//!
//! let calc = VarCalculator::new(&bid_changes, &stats, VarConfig::default());
//! let request = VarRequest::new(10_000.0, 2.0, eurusd, gbpusd)
//!     .with_directions(Direction::Long, Direction::Short)
//!     .with_method(VarMethod::Normal);
//!
//! let report = calc.calculate(&request)?;
//! for row in report.projection(ConfidenceLevel::Pct99) {
//!     println!("day {}: {:.2}", row.day, row.portfolio);
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use fxvar_core::{BidChangeTable, CurrencyPair, Direction, PairStats, StatsTable};

use crate::combined::{combined_series, Leg};
use crate::config::VarConfig;
use crate::error::{RiskError, RiskResult};
use crate::var::{
    historical_projection, historical_quantile, leg_dollar_var, leg_quantile, normal_projection,
    standalone_var, ConfidenceLevel, NormalDailyVar, ProjectionRow, StandaloneVar, VarMethod,
};

/// User parameters of one VaR calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarRequest {
    /// Account equity in dollars.
    pub account: f64,
    /// Share of the account posted as margin, in percent.
    pub position_pct: f64,
    /// First currency pair.
    pub pair_a: CurrencyPair,
    /// Second currency pair.
    pub pair_b: CurrencyPair,
    /// Direction of the first pair.
    pub direction_a: Direction,
    /// Direction of the second pair.
    pub direction_b: Direction,
    /// Calculation method.
    pub method: VarMethod,
}

impl VarRequest {
    /// Creates a long/long historical request.
    #[must_use]
    pub fn new(account: f64, position_pct: f64, pair_a: CurrencyPair, pair_b: CurrencyPair) -> Self {
        Self {
            account,
            position_pct,
            pair_a,
            pair_b,
            direction_a: Direction::Long,
            direction_b: Direction::Long,
            method: VarMethod::Historical,
        }
    }

    /// Sets both directions.
    #[must_use]
    pub fn with_directions(mut self, direction_a: Direction, direction_b: Direction) -> Self {
        self.direction_a = direction_a;
        self.direction_b = direction_b;
        self
    }

    /// Sets the calculation method.
    #[must_use]
    pub fn with_method(mut self, method: VarMethod) -> Self {
        self.method = method;
        self
    }

    /// Checks the user-correctable constraints.
    pub fn validate(&self) -> RiskResult<()> {
        if self.pair_a == self.pair_b {
            return Err(RiskError::Validation(
                "please choose 2 different pairs".to_string(),
            ));
        }
        if !self.account.is_finite() || self.account <= 0.0 {
            return Err(RiskError::Validation(
                "account should be greater than 0".to_string(),
            ));
        }
        if !self.position_pct.is_finite() {
            return Err(RiskError::Validation(
                "position must be a finite percentage".to_string(),
            ));
        }
        Ok(())
    }
}

/// Margin and notional of a position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSize {
    /// Dollars posted as margin.
    pub margin_amount: f64,
    /// Leveraged entry notional.
    pub amount_entry: f64,
}

impl PositionSize {
    /// Sizes a position: `margin = account * pct / 100`, `entry = margin * leverage`.
    #[must_use]
    pub fn new(account: f64, position_pct: f64, leverage: f64) -> Self {
        let margin_amount = account * position_pct / 100.0;
        Self {
            margin_amount,
            amount_entry: margin_amount * leverage,
        }
    }
}

/// Per-pair figures of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegSummary {
    /// Currency pair.
    pub pair: CurrencyPair,
    /// Position direction.
    pub direction: Direction,
    /// Daily volatility, as a fraction.
    pub daily_sd: f64,
    /// Portfolio weight.
    pub weight: f64,
    /// Standalone VaR of this leg.
    pub standalone: StandaloneVar,
}

/// Result of a VaR calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarReport {
    /// Account equity.
    pub account: f64,
    /// Position size in percent of the account.
    pub position_pct: f64,
    /// Dollars posted as margin.
    pub margin_amount: f64,
    /// Leveraged entry notional.
    pub amount_entry: f64,
    /// Method the projections were computed with.
    pub method: VarMethod,
    /// First leg.
    pub leg_a: LegSummary,
    /// Second leg.
    pub leg_b: LegSummary,
    /// Correlation of the two pairs.
    pub correlation: f64,
    /// Daily volatility of the weighted portfolio.
    pub sd_portfolio: f64,
    /// Day-by-day projection at 95%.
    pub var_95: Vec<ProjectionRow>,
    /// Day-by-day projection at 99%.
    pub var_99: Vec<ProjectionRow>,
}

impl VarReport {
    /// Returns the projection table for a confidence level.
    #[must_use]
    pub fn projection(&self, confidence: ConfidenceLevel) -> &[ProjectionRow] {
        match confidence {
            ConfidenceLevel::Pct95 => &self.var_95,
            ConfidenceLevel::Pct99 => &self.var_99,
        }
    }
}

/// Calculator over a snapshot of the two reference tables.
pub struct VarCalculator<'a> {
    bid_changes: &'a BidChangeTable,
    stats: &'a StatsTable,
    config: VarConfig,
}

impl<'a> VarCalculator<'a> {
    /// Creates a calculator.
    #[must_use]
    pub fn new(bid_changes: &'a BidChangeTable, stats: &'a StatsTable, config: VarConfig) -> Self {
        Self {
            bid_changes,
            stats,
            config,
        }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &VarConfig {
        &self.config
    }

    /// Runs a calculation.
    ///
    /// # Errors
    ///
    /// - `RiskError::Validation` for identical pairs or a non-positive
    ///   account, before any lookup
    /// - `RiskError::Reference` if the combination or a pair is unknown
    /// - `RiskError::Math` if a series has no usable observation
    pub fn calculate(&self, request: &VarRequest) -> RiskResult<VarReport> {
        request.validate()?;
        self.config.validate()?;

        info!(
            "Calculating {} VaR for {} {} / {} {}",
            request.method, request.direction_a, request.pair_a, request.direction_b, request.pair_b
        );

        let stats = self.stats.lookup(&request.pair_a, &request.pair_b)?;
        let changes_a = self.bid_changes.series(&request.pair_a)?;
        let changes_b = self.bid_changes.series(&request.pair_b)?;

        let size = PositionSize::new(request.account, request.position_pct, self.config.leverage);
        debug!(
            "margin {:.2}, entry {:.2}",
            size.margin_amount, size.amount_entry
        );

        let leg_a = Leg::new(changes_a, stats.weight_a, request.direction_a);
        let leg_b = Leg::new(changes_b, stats.weight_b, request.direction_b);

        let (var_95, var_99) = match request.method {
            VarMethod::Historical => {
                let combined = combined_series(&leg_a, &leg_b)?;
                (
                    self.historical(&combined, size, request.account, ConfidenceLevel::Pct95)?,
                    self.historical(&combined, size, request.account, ConfidenceLevel::Pct99)?,
                )
            }
            VarMethod::Normal => (
                self.normal(&leg_a, &leg_b, &stats, size, request.account, ConfidenceLevel::Pct95)?,
                self.normal(&leg_a, &leg_b, &stats, size, request.account, ConfidenceLevel::Pct99)?,
            ),
        };

        Ok(VarReport {
            account: request.account,
            position_pct: request.position_pct,
            margin_amount: size.margin_amount,
            amount_entry: size.amount_entry,
            method: request.method,
            leg_a: self.summary(&request.pair_a, &leg_a, stats.sd_a, size),
            leg_b: self.summary(&request.pair_b, &leg_b, stats.sd_b, size),
            correlation: stats.correl,
            sd_portfolio: stats.sd_portfolio,
            var_95,
            var_99,
        })
    }

    fn historical(
        &self,
        combined: &[f64],
        size: PositionSize,
        account: f64,
        confidence: ConfidenceLevel,
    ) -> RiskResult<Vec<ProjectionRow>> {
        let q = historical_quantile(combined, confidence)?;
        Ok(historical_projection(
            size.amount_entry,
            q,
            account,
            self.config.horizon_days,
        ))
    }

    fn normal(
        &self,
        leg_a: &Leg<'_>,
        leg_b: &Leg<'_>,
        stats: &PairStats,
        size: PositionSize,
        account: f64,
        confidence: ConfidenceLevel,
    ) -> RiskResult<Vec<ProjectionRow>> {
        let q_a = leg_quantile(leg_a.changes, leg_a.direction, confidence)?;
        let q_b = leg_quantile(leg_b.changes, leg_b.direction, confidence)?;

        let daily = NormalDailyVar::new(
            leg_dollar_var(size.amount_entry, q_a, leg_a.weight, leg_a.direction),
            leg_dollar_var(size.amount_entry, q_b, leg_b.weight, leg_b.direction),
            stats.correl,
        );
        debug!(
            "normal {} daily VaR: A {:.2}, B {:.2}, portfolio {:.2}",
            confidence, daily.leg_a, daily.leg_b, daily.portfolio
        );

        Ok(normal_projection(daily, account, self.config.horizon_days))
    }

    fn summary(
        &self,
        pair: &CurrencyPair,
        leg: &Leg<'_>,
        daily_sd: f64,
        size: PositionSize,
    ) -> LegSummary {
        LegSummary {
            pair: pair.clone(),
            direction: leg.direction,
            daily_sd,
            weight: leg.weight,
            standalone: standalone_var(size.amount_entry, daily_sd, &self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fxvar_core::parse_combination;

    fn pair(code: &str) -> CurrencyPair {
        code.parse().unwrap()
    }

    fn fixtures() -> (BidChangeTable, StatsTable) {
        let bid = BidChangeTable::from_columns(vec![
            (pair("EURUSD"), vec![0.01, -0.01, 0.005, -0.02]),
            (pair("GBPUSD"), vec![0.0, -0.01, 0.01, -0.01]),
            (pair("USDJPY"), vec![0.0, 0.0, 0.0, 0.0]),
        ])
        .unwrap();
        let mut stats = StatsTable::new();
        stats
            .insert(
                parse_combination("EURUSD, GBPUSD").unwrap(),
                PairStats::new("EURUSD, GBPUSD", 0.006, 0.007, 0.6, 0.5, 0.5, 0.0059).unwrap(),
            )
            .unwrap();
        (bid, stats)
    }

    #[test]
    fn test_position_size() {
        let size = PositionSize::new(10_000.0, 2.0, 500.0);
        assert_relative_eq!(size.margin_amount, 200.0);
        assert_relative_eq!(size.amount_entry, 100_000.0);
    }

    #[test]
    fn test_identical_pairs_rejected() {
        let (bid, stats) = fixtures();
        let calc = VarCalculator::new(&bid, &stats, VarConfig::default());
        let err = calc
            .calculate(&VarRequest::new(10_000.0, 2.0, pair("EURUSD"), pair("EURUSD")))
            .unwrap_err();
        assert!(err.is_user_error());
    }

    #[test]
    fn test_non_positive_account_rejected() {
        let (bid, stats) = fixtures();
        let calc = VarCalculator::new(&bid, &stats, VarConfig::default());
        for account in [0.0, -1.0, f64::NAN] {
            let err = calc
                .calculate(&VarRequest::new(account, 2.0, pair("EURUSD"), pair("GBPUSD")))
                .unwrap_err();
            assert!(matches!(err, RiskError::Validation(_)));
        }
    }

    #[test]
    fn test_validation_precedes_lookup() {
        // the combination is unknown too, but validation wins
        let (bid, stats) = fixtures();
        let calc = VarCalculator::new(&bid, &stats, VarConfig::default());
        let err = calc
            .calculate(&VarRequest::new(0.0, 2.0, pair("EURUSD"), pair("USDJPY")))
            .unwrap_err();
        assert!(matches!(err, RiskError::Validation(_)));
    }

    #[test]
    fn test_unknown_combination() {
        let (bid, stats) = fixtures();
        let calc = VarCalculator::new(&bid, &stats, VarConfig::default());
        let err = calc
            .calculate(&VarRequest::new(10_000.0, 2.0, pair("EURUSD"), pair("USDJPY")))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_reverse_order_request_swaps_legs() {
        let (bid, stats) = fixtures();
        let calc = VarCalculator::new(&bid, &stats, VarConfig::default());
        let report = calc
            .calculate(&VarRequest::new(10_000.0, 2.0, pair("GBPUSD"), pair("EURUSD")))
            .unwrap();
        assert_eq!(report.leg_a.pair, pair("GBPUSD"));
        assert_relative_eq!(report.leg_a.daily_sd, 0.007);
        assert_relative_eq!(report.leg_b.daily_sd, 0.006);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let (bid, stats) = fixtures();
        let calc = VarCalculator::new(&bid, &stats, VarConfig::default().with_horizon_days(1));
        let err = calc
            .calculate(&VarRequest::new(10_000.0, 2.0, pair("EURUSD"), pair("GBPUSD")))
            .unwrap_err();
        assert!(matches!(err, RiskError::InvalidConfig(_)));
    }
}
