//! CSV source for the weight/standard-deviation/correlation table.

use std::io::Read;
use std::path::Path;

use fxvar_core::{parse_combination, PairStats, StatsTable};
use serde::Deserialize;
use tracing::debug;

use crate::error::FileResult;
use crate::open;

/// CSV record for one pair combination.
#[derive(Debug, Deserialize)]
struct StatsRecord {
    #[serde(rename = "Currency Portfolio")]
    combination: String,
    #[serde(rename = "SD_A")]
    sd_a: f64,
    #[serde(rename = "SD_B")]
    sd_b: f64,
    #[serde(rename = "Correl")]
    correl: f64,
    #[serde(rename = "Weight_A")]
    weight_a: f64,
    #[serde(rename = "Weight_B")]
    weight_b: f64,
    #[serde(rename = "SD_Portfolio")]
    sd_portfolio: f64,
}

/// Loads the statistics table from a CSV file.
pub fn load_pair_stats(path: impl AsRef<Path>) -> FileResult<StatsTable> {
    let path = path.as_ref();
    debug!("Loading pair statistics from {}", path.display());
    read_pair_stats(open(path)?)
}

/// Reads the statistics table from any CSV reader.
pub fn read_pair_stats<R: Read>(reader: R) -> FileResult<StatsTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut table = StatsTable::new();

    for result in reader.deserialize() {
        let record: StatsRecord = result?;
        let combination = parse_combination(&record.combination)?;
        let stats = PairStats::new(
            &record.combination,
            record.sd_a,
            record.sd_b,
            record.correl,
            record.weight_a,
            record.weight_b,
            record.sd_portfolio,
        )?;
        table.insert(combination, stats)?;
    }

    debug!("Loaded {} pair combinations", table.len());
    Ok(table)
}
