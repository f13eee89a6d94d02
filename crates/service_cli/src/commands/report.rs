//! Report command implementation
//!
//! Runs a portfolio analysis request against locally supplied market data
//! and prints one risk table per ticker.

use std::path::Path;

use pricer_risk::analysis::{
    ordered_scenarios, AnalyzeRequest, PortfolioAnalyzer, PortfolioReport, StaticMarketData,
    DEFAULT_RISK_FREE_RATE, DEFAULT_VOLATILITY,
};
use tracing::{info, warn};

use super::{evaluator, load_json};
use crate::{CliError, Result};

const RULE_WIDTH: usize = 60;

/// Market data supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketArgs {
    /// `(ticker, spot)` quotes
    pub spots: Vec<(String, f64)>,
    /// Risk-free rate override
    pub rate: Option<f64>,
    /// Default volatility override
    pub volatility: Option<f64>,
}

impl MarketArgs {
    /// Validates the overrides and builds the provider.
    pub fn provider(&self) -> Result<StaticMarketData> {
        let rate = self.rate.unwrap_or(DEFAULT_RISK_FREE_RATE);
        if !rate.is_finite() {
            return Err(CliError::InvalidArgument(format!("--rate must be finite, got {}", rate)));
        }
        let volatility = self.volatility.unwrap_or(DEFAULT_VOLATILITY);
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(CliError::InvalidArgument(format!(
                "--volatility must be finite and non-negative, got {}",
                volatility
            )));
        }
        Ok(StaticMarketData::new(rate, volatility).with_spots(self.spots.iter().cloned()))
    }
}

/// Parses a `TICKER=PRICE` quote.
pub fn parse_spot(raw: &str) -> std::result::Result<(String, f64), String> {
    let (ticker, price) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected TICKER=PRICE, got '{}'", raw))?;
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(format!("missing ticker in '{}'", raw));
    }
    let price: f64 = price
        .trim()
        .parse()
        .map_err(|_| format!("invalid price in '{}'", raw))?;
    if !price.is_finite() || price <= 0.0 {
        return Err(format!("price must be positive in '{}'", raw));
    }
    Ok((ticker.to_string(), price))
}

/// Run the report command
pub fn run(request: &Path, market: &MarketArgs, date: Option<&str>) -> Result<()> {
    let report = analyze_file(request, market, date)?;
    print!("{}", render_report(&report));
    Ok(())
}

/// Loads an analysis request and runs it against `market`.
pub fn analyze_file(
    request: &Path,
    market: &MarketArgs,
    date: Option<&str>,
) -> Result<PortfolioReport> {
    let provider = market.provider()?;
    let evaluator = evaluator(date)?;
    let request: AnalyzeRequest = load_json(request)?;

    for position in &request.positions {
        if !market.spots.iter().any(|(ticker, _)| *ticker == position.ticker) {
            warn!(ticker = %position.ticker, "No --spot given for ticker");
        }
    }
    info!(
        positions = request.positions.len(),
        scenarios = request.scenario_range.len(),
        "Generating risk report"
    );

    Ok(PortfolioAnalyzer::new(evaluator).analyze(&request, &provider))
}

/// Renders one table per ticker, scenarios in numeric order.
pub fn render_report(report: &PortfolioReport) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut lines = Vec::new();

    for (ticker, scenarios) in report {
        lines.push(String::new());
        lines.push(heavy.clone());
        lines.push(format!("RISK REPORT: {}", ticker));
        lines.push(heavy.clone());
        lines.push(format!(
            "{:<12} | {:<12} | {:<10} | {:<10} | {:<10}",
            "Scenario", "PnL", "Delta", "Gamma", "Theta"
        ));
        lines.push(light.clone());
        lines.extend(ordered_scenarios(scenarios).into_iter().map(|(label, m)| {
            format!(
                "{:<12} | {:>12.2} | {:>10.2} | {:>10.4} | {:>10.2}",
                label, m.pnl, m.delta, m.gamma, m.theta
            )
        }));
        lines.push(heavy.clone());
    }

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
