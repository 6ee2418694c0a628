//! # FxVar Core
//!
//! Core types for the FxVar library.
//!
//! This crate provides the reference-data model every other crate builds on:
//!
//! - **Types**: `CurrencyPair` and `Direction`
//! - **Statistics**: `PairStats` and the `StatsTable` with order-insensitive lookup
//! - **Series**: `BidChangeTable`, the aligned daily bid changes per pair
//!
//! ## Example
//!
//! ```rust
//! use fxvar_core::prelude::*;
//!
//! let mut table = StatsTable::new();
//! let stats = PairStats::new("EURUSD, GBPUSD", 0.006, 0.007, 0.65, 0.55, 0.45, 0.0058).unwrap();
//! table.insert(parse_combination("EURUSD, GBPUSD").unwrap(), stats).unwrap();
//!
//! let eur: CurrencyPair = "EURUSD".parse().unwrap();
//! let gbp: CurrencyPair = "GBPUSD".parse().unwrap();
//! let reversed = table.lookup(&gbp, &eur).unwrap();
//! assert_eq!(reversed.weight_a, 0.45);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod series;
pub mod stats;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ReferenceError, ReferenceResult};
    pub use crate::series::BidChangeTable;
    pub use crate::stats::{parse_combination, Combination, PairStats, StatsTable};
    pub use crate::types::{CurrencyPair, Direction};
}

// Re-export commonly used types at crate root
pub use error::{ReferenceError, ReferenceResult};
pub use series::BidChangeTable;
pub use stats::{parse_combination, Combination, PairStats, StatsTable};
pub use types::{CurrencyPair, Direction};
