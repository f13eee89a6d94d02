//! Scenario evaluation error types.
//!
//! Only request-level failures are errors. Per-leg defects (unparseable
//! expiry, expired leg, undefined theta) are counted in the result instead.

use pricer_core::market_data::MarketDataError;
use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

/// Errors that abort a whole scenario evaluation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScenarioError {
    /// Out-of-domain market field: spot, rate, volatility or shocked spot.
    #[error("Invalid market data: {0}")]
    InvalidMarketData(String),

    /// Structurally malformed request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Unexpected numerical failure while pricing.
    #[error("Computation error: {0}")]
    Computation(String),
}

impl From<MarketDataError> for ScenarioError {
    fn from(err: MarketDataError) -> Self {
        ScenarioError::InvalidMarketData(err.to_string())
    }
}

impl From<AnalyticalError> for ScenarioError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidSpot { .. }
            | AnalyticalError::InvalidVolatility { .. }
            | AnalyticalError::MarketData(_) => ScenarioError::InvalidMarketData(err.to_string()),
            AnalyticalError::InvalidStrike { .. } => ScenarioError::InvalidRequest(err.to_string()),
            AnalyticalError::ExpiredOption { .. }
            | AnalyticalError::NumericalInstability { .. } => {
                ScenarioError::Computation(err.to_string())
            }
        }
    }
}
