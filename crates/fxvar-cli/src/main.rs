//! FxVar CLI - Value-at-Risk for a two-pair FX margin position.
//!
//! # Usage
//!
//! ```bash
//! # Historical and normal VaR for long EURUSD / short GBPUSD
//! fxvar calc --account 10000 --position 2 --pair-a EURUSD --pair-b GBPUSD --direction-b short
//!
//! # Only the normal method, as JSON
//! fxvar --format json calc -a 10000 -p 2 --pair-a EURUSD --pair-b GBPUSD --method normal
//!
//! # List the pairs and combinations in the reference data
//! fxvar --data-dir ./data pairs
//!
//! # Show the effective engine configuration
//! fxvar config show
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let context = Context::new(&cli);

    // Execute command
    match cli.command {
        Commands::Calc(args) => commands::calc::execute(args, &context)?,
        Commands::Pairs => commands::pairs::execute(&context)?,
        Commands::Config(args) => commands::config::execute(args, &context)?,
    }

    Ok(())
}

/// Logs go to stderr so JSON and CSV output on stdout stay parseable.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "fxvar_cli=debug,fxvar_risk=debug,fxvar_ext_file=debug,fxvar_math=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
