//! Portfolio analysis over shock ladders.
//!
//! - [`MarketDataProvider`]: Spot, rate and volatility quotes
//! - [`StaticMarketData`]: Configuration-backed provider
//! - [`PortfolioAnalyzer`]: Positions × shocks → per-ticker [`Metrics`]

mod portfolio;
mod provider;

pub use portfolio::{
    ordered_scenarios, shock_label, AnalyzeRequest, Metrics, PortfolioAnalyzer, PortfolioReport,
    Position, PositionLeg,
};
pub use provider::{
    MarketDataProvider, StaticMarketData, DEFAULT_RISK_FREE_RATE, DEFAULT_VOLATILITY,
};
