//! Market data sources for portfolio analysis.

use std::collections::HashMap;

use pricer_core::market_data::MarketDataError;

/// Risk-free rate used when none is configured.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.0425;

/// Volatility used for tickers without their own quote.
pub const DEFAULT_VOLATILITY: f64 = 0.30;

/// Source of spot, rate and volatility quotes.
pub trait MarketDataProvider: Send + Sync {
    /// Latest spot price for `ticker`.
    fn spot_price(&self, ticker: &str) -> Result<f64, MarketDataError>;

    /// Continuously compounded risk-free rate.
    fn risk_free_rate(&self) -> Result<f64, MarketDataError>;

    /// Volatility for `ticker`.
    fn volatility(&self, ticker: &str) -> Result<f64, MarketDataError>;
}

/// Fixed quotes, typically loaded from configuration.
///
/// # Examples
///
/// ```
/// use pricer_risk::analysis::{MarketDataProvider, StaticMarketData};
///
/// let market = StaticMarketData::default()
///     .with_spot("AAPL", 190.0)
///     .with_volatility("TSLA", 0.55);
///
/// assert_eq!(market.spot_price("AAPL").unwrap(), 190.0);
/// assert!(market.spot_price("MSFT").is_err());
/// assert_eq!(market.volatility("AAPL").unwrap(), 0.30);
/// assert_eq!(market.volatility("TSLA").unwrap(), 0.55);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMarketData {
    risk_free_rate: f64,
    default_volatility: f64,
    spots: HashMap<String, f64>,
    volatilities: HashMap<String, f64>,
}

impl Default for StaticMarketData {
    fn default() -> Self {
        Self::new(DEFAULT_RISK_FREE_RATE, DEFAULT_VOLATILITY)
    }
}

impl StaticMarketData {
    /// Provider with no spots.
    pub fn new(risk_free_rate: f64, default_volatility: f64) -> Self {
        Self {
            risk_free_rate,
            default_volatility,
            spots: HashMap::new(),
            volatilities: HashMap::new(),
        }
    }

    /// Adds or replaces a spot quote.
    pub fn with_spot(mut self, ticker: impl Into<String>, spot: f64) -> Self {
        self.spots.insert(ticker.into(), spot);
        self
    }

    /// Adds or replaces a per-ticker volatility.
    pub fn with_volatility(mut self, ticker: impl Into<String>, volatility: f64) -> Self {
        self.volatilities.insert(ticker.into(), volatility);
        self
    }

    /// Adds every `(ticker, spot)` pair.
    pub fn with_spots<I, K>(mut self, spots: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.spots
            .extend(spots.into_iter().map(|(ticker, spot)| (ticker.into(), spot)));
        self
    }

    /// Tickers with a spot quote.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.spots.keys().map(String::as_str)
    }
}

impl MarketDataProvider for StaticMarketData {
    fn spot_price(&self, ticker: &str) -> Result<f64, MarketDataError> {
        self.spots
            .get(ticker)
            .copied()
            .ok_or_else(|| MarketDataError::MissingQuote {
                symbol: ticker.to_string(),
            })
    }

    fn risk_free_rate(&self) -> Result<f64, MarketDataError> {
        Ok(self.risk_free_rate)
    }

    fn volatility(&self, ticker: &str) -> Result<f64, MarketDataError> {
        Ok(self
            .volatilities
            .get(ticker)
            .copied()
            .unwrap_or(self.default_volatility))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let market = StaticMarketData::default();
        assert_eq!(market.risk_free_rate().unwrap(), 0.0425);
        assert_eq!(market.volatility("ANY").unwrap(), 0.30);
        assert_eq!(market.tickers().count(), 0);
    }

    #[test]
    fn test_missing_spot() {
        let market = StaticMarketData::default().with_spot("AAPL", 190.0);
        match market.spot_price("aapl").unwrap_err() {
            MarketDataError::MissingQuote { symbol } => assert_eq!(symbol, "aapl"),
            other => panic!("Expected MissingQuote, got {:?}", other),
        }
    }

    #[test]
    fn test_with_spots_extends() {
        let market = StaticMarketData::new(0.01, 0.2)
            .with_spot("SPY", 500.0)
            .with_spots([("QQQ", 430.0), ("SPY", 510.0)]);
        assert_eq!(market.spot_price("SPY").unwrap(), 510.0);
        assert_eq!(market.spot_price("QQQ").unwrap(), 430.0);
        assert_eq!(market.tickers().count(), 2);
    }
}
