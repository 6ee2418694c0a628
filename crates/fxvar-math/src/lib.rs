//! # FxVar Math
//!
//! Statistical utilities for the FxVar library.
//!
//! - **Quantiles**: empirical quantiles with linear interpolation, the
//!   building block of historical-simulation VaR

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod quantile;

pub use error::{MathError, MathResult};
pub use quantile::quantile;
