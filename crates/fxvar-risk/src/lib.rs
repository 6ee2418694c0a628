//! # fxvar-risk
//!
//! Value-at-Risk for a two-pair FX margin position.
//!
//! This crate provides:
//!
//! - **Combined series**: direction-signed, weighted daily returns of the position
//! - **Historical VaR**: empirical quantiles of the combined series
//! - **Normal VaR**: per-leg quantiles aggregated through the correlation
//! - **Standalone VaR**: single-pair VaR from the daily volatility and a z-score
//! - **Projection**: square-root-of-time scaling over a multi-day horizon
//!
//! ## Example
//!
//! ```ignore
//! use fxvar_risk::prelude::*;
//!
//! let calc = VarCalculator::new(&bid_changes, &stats, VarConfig::default());
//! let report = calc.calculate(&VarRequest::new(10_000.0, 2.0, eurusd, gbpusd))?;
//! println!("1-day 95% VaR: {:.2}", report.var_95[0].portfolio);
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

pub mod calculator;
pub mod combined;
pub mod config;
pub mod var;
mod error;

pub use calculator::{LegSummary, PositionSize, VarCalculator, VarReport, VarRequest};
pub use config::VarConfig;
pub use error::{RiskError, RiskResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::*;
    pub use crate::combined::*;
    pub use crate::config::VarConfig;
    pub use crate::var::*;
    pub use crate::{RiskError, RiskResult};
    pub use fxvar_core::{CurrencyPair, Direction};
}
