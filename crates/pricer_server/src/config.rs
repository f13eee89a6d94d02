//! Server configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use pricer_risk::analysis::{StaticMarketData, DEFAULT_RISK_FREE_RATE, DEFAULT_VOLATILITY};

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid environment: {0}. Must be one of: development, staging, production")]
    InvalidEnvironment(String),

    #[error("Invalid risk-free rate: {0}. Must be finite")]
    InvalidRate(f64),

    #[error("Invalid default volatility: {0}. Must be finite and non-negative")]
    InvalidVolatility(f64),

    #[error("Invalid spot for {ticker}: {spot}. Must be finite and positive")]
    InvalidSpot { ticker: String, spot: f64 },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Market data served to portfolio analysis
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Volatility for tickers without an override
    pub default_volatility: f64,
    /// Ticker → spot price
    pub spots: BTreeMap<String, f64>,
    /// Ticker → volatility override
    pub volatilities: BTreeMap<String, f64>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            default_volatility: DEFAULT_VOLATILITY,
            spots: BTreeMap::new(),
            volatilities: BTreeMap::new(),
        }
    }
}

impl MarketConfig {
    /// Provider backed by this configuration
    pub fn provider(&self) -> StaticMarketData {
        let provider = StaticMarketData::new(self.risk_free_rate, self.default_volatility)
            .with_spots(self.spots.iter().map(|(t, s)| (t.clone(), *s)));
        self.volatilities
            .iter()
            .fold(provider, |p, (ticker, vol)| p.with_volatility(ticker.clone(), *vol))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.risk_free_rate.is_finite() {
            return Err(ConfigError::InvalidRate(self.risk_free_rate));
        }
        for vol in std::iter::once(&self.default_volatility).chain(self.volatilities.values()) {
            if !vol.is_finite() || *vol < 0.0 {
                return Err(ConfigError::InvalidVolatility(*vol));
            }
        }
        for (ticker, spot) in &self.spots {
            if !spot.is_finite() || *spot <= 0.0 {
                return Err(ConfigError::InvalidSpot {
                    ticker: ticker.clone(),
                    spot: *spot,
                });
            }
        }
        Ok(())
    }
}

/// Server configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Environment (development, staging, production)
    #[serde(deserialize_with = "deserialize_environment")]
    pub environment: Environment,
    /// Market data section
    pub market: MarketConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_environment<'de, D>(deserializer: D) -> Result<Environment, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Environment::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: LogLevel::Info,
            environment: Environment::Development,
            market: MarketConfig::default(),
        }
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={}", name, value)))
}

/// Parses `AAPL=190.5,TSLA=250` into a spot table.
fn parse_spots(value: &str) -> Result<BTreeMap<String, f64>, ConfigError> {
    value
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            let (ticker, spot) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::EnvError(format!("RISK_SPOTS entry '{}'", entry)))?;
            Ok((ticker.trim().to_string(), parse_env("RISK_SPOTS", spot)?))
        })
        .collect()
}

impl ServerConfig {
    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = std::env::var("RISK_SERVER_HOST") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("RISK_SERVER_PORT") {
            self.port = port.parse().map_err(|_| ConfigError::InvalidPort(0))?;
        }
        if let Ok(log_level) = std::env::var("RISK_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        if let Ok(env) = std::env::var("RISK_ENV") {
            self.environment = Environment::from_str(&env)?;
        }
        if let Ok(rate) = std::env::var("RISK_FREE_RATE") {
            self.market.risk_free_rate = parse_env("RISK_FREE_RATE", &rate)?;
        }
        if let Ok(vol) = std::env::var("RISK_DEFAULT_VOLATILITY") {
            self.market.default_volatility = parse_env("RISK_DEFAULT_VOLATILITY", &vol)?;
        }
        if let Ok(spots) = std::env::var("RISK_SPOTS") {
            self.market.spots.extend(parse_spots(&spots)?);
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: ServerConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port));
        }
        self.market.validate()
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(rate) = cli.risk_free_rate {
            self.market.risk_free_rate = rate;
        }
        if let Some(vol) = cli.default_volatility {
            self.market.default_volatility = vol;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Host address override
    pub host: Option<String>,
    /// Port override
    pub port: Option<u16>,
    /// Log level override
    pub log_level: Option<String>,
    /// Risk-free rate override
    pub risk_free_rate: Option<f64>,
    /// Default volatility override
    pub default_volatility: Option<f64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ServerConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(config_path) => ServerConfig::from_file(config_path)?,
        None => ServerConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
