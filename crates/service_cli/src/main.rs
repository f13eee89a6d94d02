//! RiskGo CLI - Local scenario evaluation and risk reports
//!
//! # Commands
//!
//! - `riskgo evaluate --request <file>` - Evaluate one scenario request, print JSON
//! - `riskgo report --request <file> --spot AAPL=190` - Print per-ticker risk tables
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate drives `pricer_risk` directly
//! without going through the REST server.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

use commands::report::{parse_spot, MarketArgs};

/// RiskGo scenario risk CLI
#[derive(Parser)]
#[command(name = "riskgo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a scenario request file and print the result as JSON
    Evaluate {
        /// Path to the scenario request (JSON)
        #[arg(short, long)]
        request: PathBuf,

        /// Valuation date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Analyse a portfolio over a shock ladder and print risk tables
    Report {
        /// Path to the analysis request (JSON)
        #[arg(short, long)]
        request: PathBuf,

        /// Spot quote, repeatable (TICKER=PRICE)
        #[arg(short, long = "spot", value_parser = parse_spot)]
        spots: Vec<(String, f64)>,

        /// Risk-free rate
        #[arg(long, env = "RISK_FREE_RATE", allow_hyphen_values = true)]
        rate: Option<f64>,

        /// Volatility used when the request does not set one
        #[arg(long, env = "RISK_DEFAULT_VOLATILITY")]
        volatility: Option<f64>,

        /// Valuation date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Installs a stderr subscriber so stdout carries only command output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Evaluate { request, date } => {
            commands::evaluate::run(&request, date.as_deref())?
        }
        Commands::Report {
            request,
            spots,
            rate,
            volatility,
            date,
        } => {
            let market = MarketArgs {
                spots,
                rate,
                volatility,
            };
            commands::report::run(&request, &market, date.as_deref())?
        }
    }
    Ok(())
}
