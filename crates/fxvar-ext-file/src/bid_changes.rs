//! CSV source for historical daily bid changes.
//!
//! Expected layout: one row per day, one `"{PAIR} Bid%Chg"` column per pair.
//! Any other column (typically the date) is ignored.
//!
//! ```text
//! Date,EURUSD Bid%Chg,GBPUSD Bid%Chg
//! 2023-01-02,,
//! 2023-01-03,0.0012,-0.0004
//! ```

use std::io::Read;
use std::path::Path;

use fxvar_core::{BidChangeTable, CurrencyPair};
use tracing::debug;

use crate::error::{FileError, FileResult};
use crate::open;

/// Header suffix marking a daily change column.
pub const BID_CHANGE_SUFFIX: &str = "Bid%Chg";

/// Loads the bid-change table from a CSV file.
pub fn load_bid_changes(path: impl AsRef<Path>) -> FileResult<BidChangeTable> {
    let path = path.as_ref();
    debug!("Loading bid changes from {}", path.display());
    read_bid_changes(open(path)?)
}

/// Reads the bid-change table from any CSV reader.
pub fn read_bid_changes<R: Read>(reader: R) -> FileResult<BidChangeTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let columns = headers
        .iter()
        .enumerate()
        .filter_map(|(index, header)| {
            header
                .strip_suffix(BID_CHANGE_SUFFIX)
                .map(|code| CurrencyPair::new(code.trim()).map(|pair| (index, pair)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if columns.is_empty() {
        return Err(FileError::MissingColumn(format!(
            "<PAIR> {BID_CHANGE_SUFFIX}"
        )));
    }

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        for ((index, _), column) in columns.iter().zip(values.iter_mut()) {
            let raw = record.get(*index).unwrap_or_default();
            column.push(parse_change(raw, row + 1, &headers[*index])?);
        }
    }

    let table = BidChangeTable::from_columns(
        columns
            .into_iter()
            .map(|(_, pair)| pair)
            .zip(values)
            .collect(),
    )?;
    debug!(
        "Loaded {} days for {} pairs",
        table.len(),
        table.pairs().len()
    );
    Ok(table)
}

/// Parses one cell; an empty or `NaN` cell is a missing day.
fn parse_change(raw: &str, row: usize, column: &str) -> FileResult<f64> {
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| FileError::Parse {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}
