//! Integration tests: reference data files on disk through to a VaR report.

use std::fs;

use approx::assert_relative_eq;
use tempfile::TempDir;

use fxvar_core::{CurrencyPair, Direction};
use fxvar_ext_file::{FileError, ReferenceData, DEFAULT_BID_CHANGE_FILE, DEFAULT_STATS_FILE};
use fxvar_risk::prelude::*;

const BID_CHANGES: &str = "\
Date,EURUSD Bid%Chg,GBPUSD Bid%Chg,USDJPY Bid%Chg
2023-01-02,,,
2023-01-03,0.004,0.002,0.001
2023-01-04,-0.010,-0.006,0.003
2023-01-05,0.002,0.004,-0.002
2023-01-06,0.006,-0.002,0.000
2023-01-09,-0.004,-0.008,0.004
2023-01-10,0.008,0.006,-0.001
2023-01-11,-0.002,0.000,0.002
2023-01-12,0.000,0.002,-0.003
2023-01-13,0.010,0.004,0.001
2023-01-16,-0.006,-0.004,0.000
";

const STATS: &str = "\
Currency Portfolio,SD_A,SD_B,Correl,Weight_A,Weight_B,SD_Portfolio
\"EURUSD, GBPUSD\",0.006,0.007,0.6,0.5,0.5,0.0059
\"USDJPY, EURUSD\",0.005,0.006,-0.3,0.55,0.45,0.0041
";

fn write_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(DEFAULT_BID_CHANGE_FILE), BID_CHANGES).unwrap();
    fs::write(dir.path().join(DEFAULT_STATS_FILE), STATS).unwrap();
    dir
}

fn pair(code: &str) -> CurrencyPair {
    CurrencyPair::new(code).unwrap()
}

#[test]
fn loads_both_tables_from_directory() {
    let dir = write_fixture();
    let data = ReferenceData::load(dir.path()).unwrap();

    assert_eq!(data.bid_changes.len(), 11);
    assert_eq!(
        data.bid_changes.pairs(),
        &[pair("EURUSD"), pair("GBPUSD"), pair("USDJPY")]
    );
    assert_eq!(data.stats.len(), 2);
}

#[test]
fn missing_first_day_is_skipped_by_the_engines() {
    let dir = write_fixture();
    let data = ReferenceData::load(dir.path()).unwrap();
    let calc = VarCalculator::new(&data.bid_changes, &data.stats, VarConfig::default());

    let report = calc
        .calculate(&VarRequest::new(10_000.0, 2.0, pair("EURUSD"), pair("GBPUSD")))
        .unwrap();

    // same ten observations as the in-memory scenario, plus one missing day
    assert_relative_eq!(report.var_95[0].portfolio, -710.0, epsilon = 1e-6);
    assert_relative_eq!(report.var_99[0].portfolio, -782.0, epsilon = 1e-6);
}

#[test]
fn reverse_stored_combination_is_resolved() {
    let dir = write_fixture();
    let data = ReferenceData::load(dir.path()).unwrap();
    let calc = VarCalculator::new(&data.bid_changes, &data.stats, VarConfig::default());

    let report = calc
        .calculate(
            &VarRequest::new(10_000.0, 2.0, pair("EURUSD"), pair("USDJPY"))
                .with_directions(Direction::Short, Direction::Long)
                .with_method(VarMethod::Normal),
        )
        .unwrap();

    assert_relative_eq!(report.leg_a.daily_sd, 0.006);
    assert_relative_eq!(report.leg_a.weight, 0.45);
    assert_relative_eq!(report.leg_b.weight, 0.55);
    assert_relative_eq!(report.correlation, -0.3);
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let err = ReferenceData::load(dir.path()).unwrap_err();

    assert!(matches!(err, FileError::Io { .. }));
    assert!(err.to_string().contains(DEFAULT_BID_CHANGE_FILE));
}
