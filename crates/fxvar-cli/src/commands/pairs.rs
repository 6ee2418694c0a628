//! Pairs command implementation.
//!
//! Lists what the reference data can price.

use serde::Serialize;
use tabled::Tabled;

use fxvar_ext_file::ReferenceData;

use super::Context;
use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{print_csv, print_header, print_json, print_table, print_warning};

/// A currency pair with its usable history.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct PairRow {
    #[tabled(rename = "Pair")]
    pub pair: String,
    #[tabled(rename = "Observations")]
    pub observations: usize,
}

/// A pair combination from the statistics table.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CombinationRow {
    #[tabled(rename = "Pair A")]
    pub pair_a: String,
    #[tabled(rename = "Pair B")]
    pub pair_b: String,
    #[tabled(rename = "History")]
    pub history: bool,
}

/// Everything the command reports.
#[derive(Debug, Clone, Serialize)]
pub struct PairsListing {
    pub pairs: Vec<PairRow>,
    pub combinations: Vec<CombinationRow>,
}

impl PairsListing {
    /// Builds the listing from loaded reference data.
    pub fn from_data(data: &ReferenceData) -> Self {
        let pairs = data
            .bid_changes
            .pairs()
            .iter()
            .map(|pair| PairRow {
                pair: pair.to_string(),
                observations: data
                    .bid_changes
                    .series(pair)
                    .map(|s| s.iter().filter(|v| v.is_finite()).count())
                    .unwrap_or_default(),
            })
            .collect();

        let combinations = data
            .stats
            .combinations()
            .map(|c| CombinationRow {
                pair_a: c.pair_a.to_string(),
                pair_b: c.pair_b.to_string(),
                history: data.bid_changes.contains(&c.pair_a)
                    && data.bid_changes.contains(&c.pair_b),
            })
            .collect();

        Self {
            pairs,
            combinations,
        }
    }
}

/// Executes the pairs command.
pub fn execute(ctx: &Context) -> CliResult<()> {
    let config = ctx.config()?;
    let listing = PairsListing::from_data(&ctx.reference_data(&config)?);

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Currency Pairs");
            }
            print_table(&listing.pairs);

            if !ctx.quiet {
                print_header("Supported Combinations");
            }
            print_table(&listing.combinations);

            if !ctx.quiet {
                for c in listing.combinations.iter().filter(|c| !c.history) {
                    print_warning(&format!(
                        "{}, {} has statistics but no bid-change history",
                        c.pair_a, c.pair_b
                    ));
                }
            }
        }
        OutputFormat::Json => print_json(&listing)?,
        OutputFormat::Csv => print_csv(&listing.combinations)?,
    }

    Ok(())
}
