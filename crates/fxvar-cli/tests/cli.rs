//! Command-line tests against reference data written to a temporary directory.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BID_CHANGES: &str = "\
Date,EURUSD Bid%Chg,GBPUSD Bid%Chg
2023-01-03,0.004,0.002
2023-01-04,-0.010,-0.006
2023-01-05,0.002,0.004
2023-01-06,0.006,-0.002
2023-01-09,-0.004,-0.008
2023-01-10,0.008,0.006
2023-01-11,-0.002,0.000
2023-01-12,0.000,0.002
2023-01-13,0.010,0.004
2023-01-16,-0.006,-0.004
";

const STATS: &str = "\
Currency Portfolio,SD_A,SD_B,Correl,Weight_A,Weight_B,SD_Portfolio
\"EURUSD, GBPUSD\",0.006,0.007,0.6,0.5,0.5,0.0059
\"EURUSD, AUDUSD\",0.006,0.008,0.4,0.5,0.5,0.0060
";

struct Fixture {
    data: TempDir,
    home: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let data = TempDir::new().unwrap();
        fs::write(data.path().join("bid_change.csv"), BID_CHANGES).unwrap();
        fs::write(data.path().join("W_SD.csv"), STATS).unwrap();
        Self {
            data,
            home: TempDir::new().unwrap(),
        }
    }

    /// `fxvar` isolated from the user's configuration directory.
    fn fxvar(&self) -> Command {
        let mut cmd = Command::cargo_bin("fxvar").unwrap();
        cmd.env_remove("FXVAR_CONFIG")
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.home.path())
            .env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env("FXVAR_DATA_DIR", self.data.path());
        cmd
    }
}

const CALC: [&str; 9] = [
    "calc",
    "--account",
    "10000",
    "--position",
    "2",
    "--pair-a",
    "EURUSD",
    "--pair-b",
    "GBPUSD",
];

#[test]
fn calc_prints_both_methods_by_default() {
    let fx = Fixture::new();
    fx.fxvar()
        .args(CALC)
        .assert()
        .success()
        .stdout(predicate::str::contains("$ 100,000.00"))
        .stdout(predicate::str::contains("$ 987.00"))
        .stdout(predicate::str::contains("$ 1,628.20"))
        .stdout(predicate::str::contains("60.00 %"))
        .stdout(predicate::str::contains("Historical VaR 95%"))
        .stdout(predicate::str::contains("Normal Distribution VaR 99%"))
        .stdout(predicate::str::contains("$ -710.00"))
        .stdout(predicate::str::contains("-7 %"))
        .stdout(predicate::str::contains("$ -684.68"));
}

#[test]
fn calc_accepts_lower_case_pairs_and_directions() {
    let fx = Fixture::new();
    fx.fxvar()
        .args([
            "calc", "-a", "10000", "-p", "2", "--pair-a", "eurusd", "--pair-b", "gbpusd",
            "--direction-b", "short", "--method", "historical",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Short GBPUSD"))
        .stdout(predicate::str::contains("2.00 %"))
        .stdout(predicate::str::contains("Weight Long - Short"))
        .stdout(predicate::str::contains("$ -155.00"))
        .stdout(predicate::str::contains("Normal Distribution").not());
}

#[test]
fn calc_json_is_machine_readable() {
    let fx = Fixture::new();
    let output = fx
        .fxvar()
        .args(["--format", "json"])
        .args(CALC)
        .args(["--method", "normal"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let report = &reports[0];
    assert_eq!(report["method"], "Normal");
    assert_eq!(report["var_95"].as_array().unwrap().len(), 5);
    let day1 = report["var_95"][0]["portfolio"].as_f64().unwrap();
    assert!((day1 + 684.678_756_790_365_2).abs() < 1e-6);
}

#[test]
fn calc_csv_has_one_row_per_day_level_and_method() {
    let fx = Fixture::new();
    let output = fx
        .fxvar()
        .args(["--format", "csv"])
        .args(CALC)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("method,confidence,day,leg_a,leg_b,portfolio,loss_pct_equity")
    );
    // 2 methods x 2 confidence levels x 5 days
    assert_eq!(lines.count(), 20);
}

#[test]
fn identical_pairs_are_rejected_before_reading_data() {
    let fx = Fixture::new();
    fx.fxvar()
        .env("FXVAR_DATA_DIR", fx.home.path().join("missing"))
        .args([
            "calc", "-a", "10000", "-p", "2", "--pair-a", "EURUSD", "--pair-b", "EURUSD",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("please choose 2 different pairs"));
}

#[test]
fn zero_account_is_rejected() {
    let fx = Fixture::new();
    fx.fxvar()
        .args([
            "calc", "-a", "0", "-p", "2", "--pair-a", "EURUSD", "--pair-b", "GBPUSD",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("account should be greater than 0"));
}

#[test]
fn unknown_combination_is_reported() {
    let fx = Fixture::new();
    fx.fxvar()
        .args([
            "calc", "-a", "10000", "-p", "2", "--pair-a", "GBPUSD", "--pair-b", "USDJPY",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unsupported pair combination: GBPUSD, USDJPY",
        ));
}

#[test]
fn invalid_pair_code_is_reported() {
    let fx = Fixture::new();
    fx.fxvar()
        .args([
            "calc", "-a", "10000", "-p", "2", "--pair-a", "EUR", "--pair-b", "GBPUSD",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid currency pair: EUR"));
}

#[test]
fn pairs_lists_series_and_combinations() {
    let fx = Fixture::new();
    fx.fxvar()
        .arg("pairs")
        .assert()
        .success()
        .stdout(predicate::str::contains("EURUSD"))
        .stdout(predicate::str::contains("AUDUSD"))
        .stderr(predicate::str::contains(
            "EURUSD, AUDUSD has statistics but no bid-change history",
        ));
}

#[test]
fn config_file_overrides_leverage() {
    let fx = Fixture::new();
    let config = fx.home.path().join("fxvar.toml");
    fs::write(&config, "[var]\nleverage = 100.0\n").unwrap();

    fx.fxvar()
        .arg("--config")
        .arg(&config)
        .args(CALC)
        .args(["--method", "historical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$ 20,000.00"))
        .stdout(predicate::str::contains("$ -142.00"));
}

#[test]
fn config_show_reports_defaults() {
    let fx = Fixture::new();
    fx.fxvar()
        .args(["--format", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"leverage\": 500.0"))
        .stdout(predicate::str::contains("\"horizon_days\": 6"));
}

#[test]
fn config_path_points_into_config_dir() {
    let fx = Fixture::new();
    fx.fxvar()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fxvar"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_path_works_with_a_malformed_config_file() {
    let fx = Fixture::new();
    let dir = fx.home.path().join("fxvar");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[var]\nleverage = \"x\"\n").unwrap();

    fx.fxvar()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    fx.fxvar()
        .args(CALC)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_path_reports_explicit_file_that_does_not_exist_yet() {
    let fx = Fixture::new();
    let missing = fx.home.path().join("new.toml");

    fx.fxvar()
        .arg("--config")
        .arg(&missing)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new.toml"));
}

#[test]
fn help_describes_config_as_read_only() {
    Command::cargo_bin("fxvar")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspect the configuration"))
        .stdout(predicate::str::contains("create").not());
}
