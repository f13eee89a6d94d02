//! Flat volatility surface implementation.

use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Volatility surface returning one implied volatility everywhere.
///
/// A zero volatility is accepted; pricing models treat it as a
/// deterministic underlying.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
///
/// let surface = FlatVol::new(0.20_f64);
/// assert_eq!(surface.volatility(80.0, 0.5).unwrap(), 0.20);
/// assert_eq!(surface.volatility(120.0, 2.0).unwrap(), 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVol<T: Float> {
    sigma: T,
}

impl<T: Float> FlatVol<T> {
    /// Construct a flat volatility surface.
    #[inline]
    pub fn new(sigma: T) -> Self {
        Self { sigma }
    }

    /// Return the constant volatility.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }
}

impl<T: Float> VolatilitySurface<T> for FlatVol<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        if strike <= T::zero() {
            return Err(MarketDataError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }
        if expiry <= T::zero() {
            return Err(MarketDataError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.sigma)
    }
}
