//! Calc command implementation.
//!
//! Sizes the position, then prints standalone VaR per pair and the day-by-day
//! portfolio VaR projection for each selected method.

use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::info;

use fxvar_risk::prelude::*;

use super::{parse_pair, Context};
use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{
    format_loss_pct, format_money, format_percent, print_csv, print_grid, print_header,
    print_json, print_table, KeyValue,
};

/// Arguments for the calc command.
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Account equity in dollars
    #[arg(short, long, allow_negative_numbers = true)]
    pub account: f64,

    /// Position size in percent of the account
    #[arg(short, long, allow_negative_numbers = true)]
    pub position: f64,

    /// First currency pair (e.g. EURUSD)
    #[arg(long)]
    pub pair_a: String,

    /// Second currency pair (e.g. GBPUSD)
    #[arg(long)]
    pub pair_b: String,

    /// Direction of the first pair (long or short)
    #[arg(long, default_value = "long")]
    pub direction_a: Direction,

    /// Direction of the second pair (long or short)
    #[arg(long, default_value = "long")]
    pub direction_b: Direction,

    /// Calculation method
    #[arg(short, long, value_enum, default_value = "both")]
    pub method: MethodArg,
}

/// Method selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Historical simulation
    Historical,
    /// Normal distribution
    Normal,
    /// Both methods
    Both,
}

impl MethodArg {
    fn methods(self) -> &'static [VarMethod] {
        match self {
            MethodArg::Historical => &[VarMethod::Historical],
            MethodArg::Normal => &[VarMethod::Normal],
            MethodArg::Both => &[VarMethod::Historical, VarMethod::Normal],
        }
    }
}

/// One projection row in CSV output.
#[derive(Debug, Serialize)]
struct CsvRow {
    method: String,
    confidence: String,
    day: u32,
    leg_a: Option<f64>,
    leg_b: Option<f64>,
    portfolio: f64,
    loss_pct_equity: f64,
}

/// Executes the calc command.
pub fn execute(args: CalcArgs, ctx: &Context) -> CliResult<()> {
    let request = VarRequest::new(
        args.account,
        args.position,
        parse_pair(&args.pair_a)?,
        parse_pair(&args.pair_b)?,
    )
    .with_directions(args.direction_a, args.direction_b);

    // Input errors surface before any file is read.
    request.validate()?;

    let config = ctx.config()?;
    let data = ctx.reference_data(&config)?;
    let calculator = VarCalculator::new(&data.bid_changes, &data.stats, config.var);

    let reports = args
        .method
        .methods()
        .iter()
        .map(|&method| calculator.calculate(&request.clone().with_method(method)))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        pair_a = %request.pair_a,
        pair_b = %request.pair_b,
        reports = reports.len(),
        "calculation finished"
    );

    match ctx.format {
        OutputFormat::Table => print_reports(&reports, ctx.quiet),
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Csv => print_csv(&csv_rows(&reports))?,
    }

    Ok(())
}

fn csv_rows(reports: &[VarReport]) -> Vec<CsvRow> {
    let mut rows = Vec::new();
    for report in reports {
        for confidence in ConfidenceLevel::ALL {
            rows.extend(report.projection(confidence).iter().map(|row| CsvRow {
                method: report.method.to_string(),
                confidence: confidence.to_string(),
                day: row.day,
                leg_a: row.leg_a,
                leg_b: row.leg_b,
                portfolio: row.portfolio,
                loss_pct_equity: row.loss_pct_equity,
            }));
        }
    }
    rows
}

fn print_reports(reports: &[VarReport], quiet: bool) {
    let Some(first) = reports.first() else {
        return;
    };

    if !quiet {
        print_header("Position");
    }
    print_table(&[
        KeyValue::money("Account", first.account),
        KeyValue::new("Position", format!("{:.2} %", first.position_pct)),
        KeyValue::money("Margin Amount", first.margin_amount),
        KeyValue::money("Amount Entry", first.amount_entry),
    ]);

    if !quiet {
        print_header("Standalone VaR");
    }
    print_legs(first);

    for report in reports {
        for confidence in ConfidenceLevel::ALL {
            if !quiet {
                print_header(&format!("{} VaR {confidence}", report.method));
            }
            print_projection(report, confidence);
        }
    }
}

fn leg_title(leg: &LegSummary) -> String {
    format!("{} {}", leg.direction, leg.pair)
}

fn weight_label(report: &VarReport) -> String {
    format!(
        "Weight {} - {}",
        report.leg_a.direction, report.leg_b.direction
    )
}

fn leg_row(label: &str, report: &VarReport, f: impl Fn(&LegSummary) -> String) -> Vec<String> {
    vec![label.to_string(), f(&report.leg_a), f(&report.leg_b)]
}

fn print_legs(report: &VarReport) {
    print_grid(
        [
            "Info".to_string(),
            leg_title(&report.leg_a),
            leg_title(&report.leg_b),
        ],
        [
            leg_row("Daily Volatility (SD)", report, |leg| {
                format_percent(leg.daily_sd, 4)
            }),
            leg_row(&weight_label(report), report, |leg| {
                format_percent(leg.weight, 2)
            }),
            leg_row("VaR 95%", report, |leg| format_money(leg.standalone.var_95)),
            leg_row("VaR 99%", report, |leg| format_money(leg.standalone.var_99)),
        ],
    );
    println!("Correlation: {}", format_percent(report.correlation, 2));
}

fn print_projection(report: &VarReport, confidence: ConfidenceLevel) {
    let rows = report.projection(confidence);
    match report.method {
        VarMethod::Historical => print_grid(
            ["Day", "Portfolio", "Max Loss % Equity"],
            rows.iter().map(|row| {
                vec![
                    row.day.to_string(),
                    format_money(row.portfolio),
                    format_loss_pct(row.loss_pct_equity),
                ]
            }),
        ),
        VarMethod::Normal => print_grid(
            [
                "Day".to_string(),
                report.leg_a.pair.to_string(),
                report.leg_b.pair.to_string(),
                "Portfolio".to_string(),
                "Max Loss % Equity".to_string(),
            ],
            rows.iter().map(|row| {
                vec![
                    row.day.to_string(),
                    row.leg_a.map_or_else(String::new, format_money),
                    row.leg_b.map_or_else(String::new, format_money),
                    format_money(row.portfolio),
                    format_loss_pct(row.loss_pct_equity),
                ]
            }),
        ),
    }
}
