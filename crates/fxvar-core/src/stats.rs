//! Precomputed statistics per currency-pair combination.
//!
//! The statistics table stores each combination in one direction only
//! ("A, B"). [`StatsTable::lookup`] hides that: callers always receive the
//! figures in the order they asked for.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ReferenceError, ReferenceResult};
use crate::types::CurrencyPair;

/// Volatility, correlation and weight figures for a pair combination.
///
/// `a` and `b` refer to the first and second pair of the combination the
/// value was looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairStats {
    /// Daily volatility of pair A, as a fraction.
    pub sd_a: f64,
    /// Daily volatility of pair B, as a fraction.
    pub sd_b: f64,
    /// Correlation between the two pairs' daily changes.
    pub correl: f64,
    /// Portfolio weight of pair A.
    pub weight_a: f64,
    /// Portfolio weight of pair B.
    pub weight_b: f64,
    /// Daily volatility of the weighted portfolio.
    pub sd_portfolio: f64,
}

impl PairStats {
    /// Creates a validated statistics row.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::InvalidStats` if any figure is not finite,
    /// a standard deviation is negative, or the correlation lies outside
    /// `[-1, 1]`.
    pub fn new(
        combination: &str,
        sd_a: f64,
        sd_b: f64,
        correl: f64,
        weight_a: f64,
        weight_b: f64,
        sd_portfolio: f64,
    ) -> ReferenceResult<Self> {
        let fields = [
            ("SD_A", sd_a),
            ("SD_B", sd_b),
            ("Correl", correl),
            ("Weight_A", weight_a),
            ("Weight_B", weight_b),
            ("SD_Portfolio", sd_portfolio),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ReferenceError::invalid_stats(
                    combination,
                    format!("{name} is not a finite number"),
                ));
            }
        }
        if sd_a < 0.0 || sd_b < 0.0 || sd_portfolio < 0.0 {
            return Err(ReferenceError::invalid_stats(
                combination,
                "standard deviations must be non-negative",
            ));
        }
        if !(-1.0..=1.0).contains(&correl) {
            return Err(ReferenceError::invalid_stats(
                combination,
                format!("correlation {correl} outside [-1, 1]"),
            ));
        }

        Ok(Self {
            sd_a,
            sd_b,
            correl,
            weight_a,
            weight_b,
            sd_portfolio,
        })
    }

    /// Returns the same statistics seen from the other ordering.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            sd_a: self.sd_b,
            sd_b: self.sd_a,
            correl: self.correl,
            weight_a: self.weight_b,
            weight_b: self.weight_a,
            sd_portfolio: self.sd_portfolio,
        }
    }
}

/// An ordered pair combination, written `"A, B"` in the reference data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    /// First pair.
    pub pair_a: CurrencyPair,
    /// Second pair.
    pub pair_b: CurrencyPair,
}

impl Combination {
    /// Creates a combination.
    #[must_use]
    pub fn new(pair_a: CurrencyPair, pair_b: CurrencyPair) -> Self {
        Self { pair_a, pair_b }
    }

    /// Returns the combination with the pairs exchanged.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            pair_a: self.pair_b.clone(),
            pair_b: self.pair_a.clone(),
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.pair_a, self.pair_b)
    }
}

/// Parses a combination key such as `"EURUSD, GBPUSD"`.
///
/// # Errors
///
/// Returns an error if the key does not contain exactly two valid pair codes.
pub fn parse_combination(key: &str) -> ReferenceResult<Combination> {
    let mut parts = key.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Ok(Combination::new(
            CurrencyPair::new(a)?,
            CurrencyPair::new(b)?,
        )),
        _ => Err(ReferenceError::InvalidCombinationKey(key.to_string())),
    }
}

/// The weight/standard-deviation/correlation table.
#[derive(Debug, Clone, Default)]
pub struct StatsTable {
    rows: HashMap<Combination, PairStats>,
    order: Vec<Combination>,
}

impl StatsTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::Duplicate` if the combination is already
    /// present in either order.
    pub fn insert(&mut self, combination: Combination, stats: PairStats) -> ReferenceResult<()> {
        if self.rows.contains_key(&combination) || self.rows.contains_key(&combination.reversed())
        {
            return Err(ReferenceError::Duplicate(combination.to_string()));
        }
        self.order.push(combination.clone());
        self.rows.insert(combination, stats);
        Ok(())
    }

    /// Looks up the statistics for `pair_a` and `pair_b`, in that order.
    ///
    /// A row stored as "B, A" is returned swapped, so `sd_a` and `weight_a`
    /// always belong to `pair_a`.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::UnsupportedCombination` if neither ordering
    /// is in the table.
    pub fn lookup(&self, pair_a: &CurrencyPair, pair_b: &CurrencyPair) -> ReferenceResult<PairStats> {
        let key = Combination::new(pair_a.clone(), pair_b.clone());
        if let Some(stats) = self.rows.get(&key) {
            return Ok(*stats);
        }
        self.rows
            .get(&key.reversed())
            .map(PairStats::swapped)
            .ok_or_else(|| ReferenceError::UnsupportedCombination {
                pair_a: pair_a.to_string(),
                pair_b: pair_b.to_string(),
            })
    }

    /// Returns the stored combinations in insertion order.
    pub fn combinations(&self) -> impl Iterator<Item = &Combination> {
        self.order.iter()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
