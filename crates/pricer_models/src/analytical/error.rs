//! Error types for analytical pricing operations.

use pricer_core::market_data::MarketDataError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidVolatility`: Negative or non-finite volatility
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `ExpiredOption`: Expiry on or before the valuation date
/// - `MarketData`: Term structure lookup failed
/// - `NumericalInstability`: Computation produced a non-finite result
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (negative or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive or non-finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Option expiry is not after the valuation date.
    #[error("Option expired: {expiry} is not after valuation date {valuation_date}")]
    ExpiredOption {
        /// Expiry date (YYYY-MM-DD)
        expiry: String,
        /// Valuation date (YYYY-MM-DD)
        valuation_date: String,
    },

    /// Curve or surface lookup failed.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = 0");
    }

    #[test]
    fn test_expired_option_display() {
        let err = AnalyticalError::ExpiredOption {
            expiry: "2024-01-01".to_string(),
            valuation_date: "2024-06-01".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Option expired: 2024-01-01 is not after valuation date 2024-06-01"
        );
    }

    #[test]
    fn test_market_data_is_transparent() {
        let err: AnalyticalError = MarketDataError::InvalidExpiry { expiry: 0.0 }.into();
        assert_eq!(format!("{}", err), "Invalid expiry: T = 0");
    }
}
