//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Risk-free discounting for option pricing.
///
/// # Invariants
///
/// - D(0) = 1
/// - D(t) > 0 for all t >= 0
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
/// let df = curve.discount_factor(2.0).unwrap();
/// assert!((curve.zero_rate(2.0).unwrap() - (-df.ln() / 2.0)).abs() < 1e-12);
/// ```
pub trait YieldCurve<T: Float> {
    /// Discount factor D(t) for maturity `t` in years.
    ///
    /// Returns `Err(MarketDataError::InvalidMaturity)` if t < 0.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Continuously compounded zero rate r(t) = -ln(D(t)) / t.
    ///
    /// Returns `Err(MarketDataError::InvalidMaturity)` if t <= 0.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        let df = self.discount_factor(t)?;
        Ok(-df.ln() / t)
    }
}
