//! # FxVar Ext File
//!
//! File-based reference data for the FxVar calculator.
//!
//! This crate loads the two static tables the VaR engines read:
//! - CSV-based daily bid changes per currency pair
//! - CSV-based weight/standard-deviation/correlation statistics per pair combination

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bid_changes;
mod error;
mod pair_stats;

pub use bid_changes::*;
pub use error::{FileError, FileResult};
pub use pair_stats::*;

use std::fs::File;
use std::path::{Path, PathBuf};

use fxvar_core::{BidChangeTable, StatsTable};

/// Default file name of the bid-change table.
pub const DEFAULT_BID_CHANGE_FILE: &str = "bid_change.csv";

/// Default file name of the statistics table.
pub const DEFAULT_STATS_FILE: &str = "W_SD.csv";

/// Both reference tables, loaded together.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Daily bid changes per pair.
    pub bid_changes: BidChangeTable,
    /// Statistics per pair combination.
    pub stats: StatsTable,
}

impl ReferenceData {
    /// Loads `bid_change.csv` and `W_SD.csv` from a directory.
    pub fn load(dir: impl AsRef<Path>) -> FileResult<Self> {
        let dir = dir.as_ref();
        Self::load_files(
            dir.join(DEFAULT_BID_CHANGE_FILE),
            dir.join(DEFAULT_STATS_FILE),
        )
    }

    /// Loads the two tables from explicit paths.
    pub fn load_files(
        bid_change_csv: impl AsRef<Path>,
        stats_csv: impl AsRef<Path>,
    ) -> FileResult<Self> {
        Ok(Self {
            bid_changes: load_bid_changes(bid_change_csv)?,
            stats: load_pair_stats(stats_csv)?,
        })
    }
}

fn open(path: &Path) -> FileResult<File> {
    File::open(path).map_err(|source| FileError::Io {
        path: PathBuf::from(path),
        source,
    })
}
