//! Volatility surface trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Implied volatility lookup.
///
/// Implementations reject non-positive strikes and expiries with
/// `InvalidStrike` / `InvalidExpiry`.
pub trait VolatilitySurface<T: Float> {
    /// Implied volatility for `strike` and time to `expiry` in years.
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError>;
}
