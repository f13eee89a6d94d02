//! Scenario request shapes.

use pricer_core::market_data::MarketSnapshot;
use pricer_core::types::Date;
use pricer_models::instruments::OptionType;

use crate::error::ScenarioError;

/// One option position in a scenario book.
///
/// `expiry` stays a raw `YYYY-MM-DD` string: a leg whose expiry cannot be
/// parsed is skipped at evaluation time rather than rejected here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionLeg {
    /// Call or put
    #[cfg_attr(feature = "serde", serde(alias = "type"))]
    pub option_type: OptionType,
    /// Strike price
    pub strike: f64,
    /// Expiry date, `YYYY-MM-DD`
    pub expiry: String,
    /// Signed position size (negative = short)
    pub quantity: f64,
}

impl OptionLeg {
    /// Creates a leg.
    pub fn new(
        option_type: OptionType,
        strike: f64,
        expiry: impl Into<String>,
        quantity: f64,
    ) -> Self {
        Self {
            option_type,
            strike,
            expiry: expiry.into(),
            quantity,
        }
    }

    fn validate(&self, index: usize) -> Result<(), ScenarioError> {
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(ScenarioError::InvalidRequest(format!(
                "leg {index}: strike must be finite and positive, got {}",
                self.strike
            )));
        }
        if !self.quantity.is_finite() {
            return Err(ScenarioError::InvalidRequest(format!(
                "leg {index}: quantity must be finite, got {}",
                self.quantity
            )));
        }
        Ok(())
    }
}

/// Base market fields of a request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketInputs {
    /// Underlying spot price
    pub spot: f64,
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Black-Scholes volatility
    pub volatility: f64,
}

impl MarketInputs {
    /// Creates market inputs.
    pub fn new(spot: f64, risk_free_rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            risk_free_rate,
            volatility,
        }
    }

    /// Validated snapshot anchored at `valuation_date`.
    ///
    /// # Errors
    /// `ScenarioError::InvalidMarketData` for a non-positive spot, a negative
    /// volatility, or any non-finite field.
    pub fn snapshot(&self, valuation_date: Date) -> Result<MarketSnapshot, ScenarioError> {
        Ok(MarketSnapshot::new(
            self.spot,
            self.risk_free_rate,
            self.volatility,
            valuation_date,
        )?)
    }
}

/// A book of legs under one beta-scaled spot shock.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::OptionType;
/// use pricer_risk::scenarios::{MarketInputs, OptionLeg, ScenarioRequest};
///
/// let request = ScenarioRequest::new(
///     MarketInputs::new(200.0, 0.04, 0.3),
///     -0.10,
///     1.5,
///     vec![OptionLeg::new(OptionType::Put, 180.0, "2026-06-19", 10.0)],
/// );
/// assert!((request.shocked_spot() - 170.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioRequest {
    /// Base market state
    pub market: MarketInputs,
    /// Market move as a fraction (-0.05 = down 5%)
    pub shock_pct: f64,
    /// Sensitivity of the underlying to the market move
    pub beta: f64,
    /// Legs, evaluated in order
    pub legs: Vec<OptionLeg>,
}

impl ScenarioRequest {
    /// Creates a request.
    pub fn new(market: MarketInputs, shock_pct: f64, beta: f64, legs: Vec<OptionLeg>) -> Self {
        Self {
            market,
            shock_pct,
            beta,
            legs,
        }
    }

    /// `spot * (1 + shock_pct * beta)`.
    #[inline]
    pub fn shocked_spot(&self) -> f64 {
        self.market.spot * (1.0 + self.shock_pct * self.beta)
    }

    /// Same book and market under a different shock.
    pub fn with_shock(&self, shock_pct: f64) -> Self {
        Self {
            shock_pct,
            ..self.clone()
        }
    }

    /// Checks the non-market fields.
    ///
    /// # Errors
    /// `ScenarioError::InvalidRequest` if `shock_pct` or `beta` is not
    /// finite, or any leg has a non-finite quantity or a strike that is not
    /// finite and positive.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !self.shock_pct.is_finite() {
            return Err(ScenarioError::InvalidRequest(format!(
                "shock_pct must be finite, got {}",
                self.shock_pct
            )));
        }
        if !self.beta.is_finite() {
            return Err(ScenarioError::InvalidRequest(format!(
                "beta must be finite, got {}",
                self.beta
            )));
        }
        self.legs
            .iter()
            .enumerate()
            .try_for_each(|(index, leg)| leg.validate(index))
    }
}
