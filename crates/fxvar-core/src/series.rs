//! Historical daily bid-price changes per currency pair.

use std::collections::HashMap;

use crate::error::{ReferenceError, ReferenceResult};
use crate::types::CurrencyPair;

/// Daily percentage bid changes, one column per pair, aligned by row.
///
/// Values are fractions (`0.0012` for +0.12%). A day without a quote is
/// stored as `NaN`.
#[derive(Debug, Clone, Default)]
pub struct BidChangeTable {
    pairs: Vec<CurrencyPair>,
    columns: HashMap<CurrencyPair, Vec<f64>>,
    rows: usize,
}

impl BidChangeTable {
    /// Builds a table from columns given in display order.
    ///
    /// # Errors
    ///
    /// Fails if a pair appears twice or the columns differ in length.
    pub fn from_columns(columns: Vec<(CurrencyPair, Vec<f64>)>) -> ReferenceResult<Self> {
        let rows = columns.first().map_or(0, |(_, values)| values.len());
        let mut table = Self {
            pairs: Vec::with_capacity(columns.len()),
            columns: HashMap::with_capacity(columns.len()),
            rows,
        };

        for (pair, values) in columns {
            if values.len() != rows {
                return Err(ReferenceError::MisalignedSeries {
                    pair: pair.to_string(),
                    expected: rows,
                    actual: values.len(),
                });
            }
            if table.columns.contains_key(&pair) {
                return Err(ReferenceError::Duplicate(pair.to_string()));
            }
            table.pairs.push(pair.clone());
            table.columns.insert(pair, values);
        }

        Ok(table)
    }

    /// Returns the daily change series for a pair.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::UnknownPair` if the table has no such column.
    pub fn series(&self, pair: &CurrencyPair) -> ReferenceResult<&[f64]> {
        self.columns
            .get(pair)
            .map(Vec::as_slice)
            .ok_or_else(|| ReferenceError::UnknownPair(pair.to_string()))
    }

    /// Returns true if the pair has a column.
    #[must_use]
    pub fn contains(&self, pair: &CurrencyPair) -> bool {
        self.columns.contains_key(pair)
    }

    /// Pairs in column order.
    #[must_use]
    pub fn pairs(&self) -> &[CurrencyPair] {
        &self.pairs
    }

    /// Number of historical days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Returns true if the table holds no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}
