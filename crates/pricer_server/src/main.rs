//! RiskGo Server
//!
//! REST API server for beta-scaled scenario analysis.

use clap::Parser;
use pricer_server::config::{build_config, CliArgs as ConfigCliArgs};
use pricer_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// RiskGo Server - REST API for scenario PnL and Greeks
#[derive(Parser, Debug)]
#[command(name = "pricer_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "RISK_SERVER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "RISK_SERVER_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RISK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Risk-free rate served to portfolio analysis
    #[arg(long, env = "RISK_FREE_RATE", allow_hyphen_values = true)]
    risk_free_rate: Option<f64>,

    /// Volatility for tickers without an override
    #[arg(long, env = "RISK_DEFAULT_VOLATILITY")]
    default_volatility: Option<f64>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            risk_free_rate: args.risk_free_rate,
            default_volatility: args.default_volatility,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("RiskGo Server v{}", pricer_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        risk_free_rate = config.market.risk_free_rate,
        default_volatility = config.market.default_volatility,
        tickers = config.market.spots.len(),
        "Server configuration loaded"
    );

    let server = Server::new(config);
    tracing::info!(address = %server.socket_addr()?, "Starting server");

    server.run().await?;

    Ok(())
}
