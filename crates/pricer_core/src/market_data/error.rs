//! Market data error types.
//!
//! Raised when a market snapshot, curve or surface is built from, or queried
//! with, values no pricing model can use.

use thiserror::Error;

/// Market data validation and lookup errors.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidSpot { spot: -5.0 };
/// assert_eq!(format!("{}", err), "Invalid spot price: S = -5");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Spot is non-finite or not strictly positive.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot
        spot: f64,
    },

    /// Volatility is non-finite or negative.
    #[error("Invalid volatility: sigma = {sigma}")]
    InvalidVolatility {
        /// The rejected volatility
        sigma: f64,
    },

    /// Risk-free rate is non-finite.
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },

    /// Negative time to maturity.
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Non-positive strike.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Non-positive time to expiry.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// No quote available for the requested symbol.
    #[error("No market data for '{symbol}'")]
    MissingQuote {
        /// Ticker or identifier that was looked up
        symbol: String,
    },
}
