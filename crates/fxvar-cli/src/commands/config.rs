//! Config command implementation.
//!
//! Shows the effective engine configuration and where it is read from.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;

use fxvar_risk::VarConfig;

use super::Context;
use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{print_csv, print_header, print_info, print_json, print_table, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show the configuration file location
    Path,
}

/// Effective settings after the file and flags are applied.
#[derive(Debug, Serialize)]
struct EffectiveConfig {
    config_file: Option<PathBuf>,
    bid_change_file: PathBuf,
    stats_file: PathBuf,
    var: VarConfig,
}

/// Executes the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> CliResult<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Path => {
            path(ctx);
            Ok(())
        }
    }
}

fn show(ctx: &Context) -> CliResult<()> {
    let config = ctx.config()?;
    let (bid_change_file, stats_file) = config.table_paths(ctx.data_dir.as_deref());
    let effective = EffectiveConfig {
        config_file: ctx.config_path.clone().filter(|p| p.is_file()),
        bid_change_file,
        stats_file,
        var: config.var,
    };

    let rows = [
        KeyValue::new(
            "Config File",
            effective
                .config_file
                .as_ref()
                .map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string()),
        ),
        KeyValue::new("Bid Change File", effective.bid_change_file.display().to_string()),
        KeyValue::new("Stats File", effective.stats_file.display().to_string()),
        KeyValue::new("Leverage", effective.var.leverage.to_string()),
        KeyValue::new("Horizon Days", effective.var.horizon_days.to_string()),
        KeyValue::new("Z-Score 95%", effective.var.z_score_95.to_string()),
        KeyValue::new("Z-Score 99%", effective.var.z_score_99.to_string()),
    ];

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Configuration");
            }
            print_table(&rows);
        }
        OutputFormat::Json => print_json(&effective)?,
        OutputFormat::Csv => print_csv(&rows)?,
    }
    Ok(())
}

fn path(ctx: &Context) {
    match &ctx.config_path {
        Some(path) => {
            println!("{}", path.display());
            if !ctx.quiet && !path.is_file() {
                print_info("File does not exist yet.");
            }
        }
        None => {
            if !ctx.quiet {
                print_info("No configuration directory on this platform.");
            }
        }
    }
}
