//! Immutable market state a pricing model is bound to.

use super::error::MarketDataError;
use crate::types::Date;

/// Spot, flat risk-free rate and flat volatility as of a valuation date.
///
/// Construction validates every field, so a `MarketSnapshot` in hand is
/// always usable by a pricing model:
///
/// - spot is finite and strictly positive
/// - rate is finite (negative rates are allowed)
/// - volatility is finite and non-negative
///
/// # Example
///
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_core::types::Date;
///
/// let today = Date::from_ymd(2025, 1, 2).unwrap();
/// let base = MarketSnapshot::new(100.0, 0.03, 0.25, today).unwrap();
///
/// let bumped = base.with_spot(105.0).unwrap();
/// assert_eq!(bumped.spot(), 105.0);
/// assert_eq!(bumped.volatility(), base.volatility());
///
/// assert!(MarketSnapshot::new(0.0, 0.03, 0.25, today).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketSnapshot {
    spot: f64,
    rate: f64,
    volatility: f64,
    valuation_date: Date,
}

impl MarketSnapshot {
    /// Build a validated snapshot.
    ///
    /// # Errors
    ///
    /// - `InvalidSpot` if spot is non-finite or <= 0
    /// - `InvalidRate` if rate is non-finite
    /// - `InvalidVolatility` if volatility is non-finite or < 0
    pub fn new(
        spot: f64,
        rate: f64,
        volatility: f64,
        valuation_date: Date,
    ) -> Result<Self, MarketDataError> {
        validate_spot(spot)?;
        if !rate.is_finite() {
            return Err(MarketDataError::InvalidRate { rate });
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(MarketDataError::InvalidVolatility { sigma: volatility });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
            valuation_date,
        })
    }

    /// Same market with a different spot.
    pub fn with_spot(&self, spot: f64) -> Result<Self, MarketDataError> {
        validate_spot(spot)?;
        Ok(Self { spot, ..*self })
    }

    /// Underlying spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Continuously compounded risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Date the snapshot is anchored at.
    #[inline]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }
}

fn validate_spot(spot: f64) -> Result<(), MarketDataError> {
    if !spot.is_finite() || spot <= 0.0 {
        return Err(MarketDataError::InvalidSpot { spot });
    }
    Ok(())
}
