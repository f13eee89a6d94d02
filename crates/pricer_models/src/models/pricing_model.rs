//! Pricing model bound to one market snapshot.

use pricer_core::market_data::curves::{FlatCurve, YieldCurve};
use pricer_core::market_data::surfaces::{FlatVol, VolatilitySurface};
use pricer_core::market_data::MarketSnapshot;
use pricer_core::types::{Calendar, Date, DayCountConvention};

use crate::analytical::{AnalyticalError, BlackScholes};
use crate::instruments::EuropeanOption;

/// Value and Greeks of one option unit.
///
/// `theta` is `None` when it is undefined for the option (see
/// [`PricingModel::theta`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionValuation {
    /// Theoretical value
    pub npv: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂t per year, if defined
    pub theta: Option<f64>,
}

/// Immutable closed-form model for European vanilla options.
///
/// Holds a flat risk-free curve and a flat volatility surface anchored at
/// the snapshot's valuation date. Time to expiry is measured with the
/// model's day count; the calendar only classifies dates and never changes
/// a price. Safe to share across threads and reuse for any number of
/// options.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{EuropeanOption, OptionType};
/// use pricer_models::models::PricingModelFactory;
///
/// let today = Date::from_ymd(2025, 1, 2).unwrap();
/// let snapshot = MarketSnapshot::new(100.0, 0.01, 0.2, today).unwrap();
/// let model = PricingModelFactory::new().build_model(&snapshot);
///
/// let expiry = Date::from_ymd(2026, 1, 2).unwrap();
/// let call = EuropeanOption::new(OptionType::Call, 100.0, expiry).unwrap();
/// let value = model.value(&call).unwrap();
/// assert!(value.npv > 0.0 && value.npv < 100.0);
/// assert!(value.delta > 0.5 && value.delta < 0.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingModel {
    snapshot: MarketSnapshot,
    curve: FlatCurve<f64>,
    surface: FlatVol<f64>,
    day_count: DayCountConvention,
    calendar: Calendar,
}

impl PricingModel {
    pub(crate) fn new(
        snapshot: MarketSnapshot,
        day_count: DayCountConvention,
        calendar: Calendar,
    ) -> Self {
        Self {
            curve: FlatCurve::new(snapshot.rate()),
            surface: FlatVol::new(snapshot.volatility()),
            snapshot,
            day_count,
            calendar,
        }
    }

    /// Market state the model is bound to.
    #[inline]
    pub fn snapshot(&self) -> &MarketSnapshot {
        &self.snapshot
    }

    /// Anchor date of both term structures.
    #[inline]
    pub fn valuation_date(&self) -> Date {
        self.snapshot.valuation_date()
    }

    /// Day count used for time to expiry.
    #[inline]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Business day calendar.
    #[inline]
    pub fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Year fraction from the valuation date to `expiry` (negative if past).
    #[inline]
    pub fn time_to_expiry(&self, expiry: Date) -> f64 {
        self.day_count
            .year_fraction_dates(self.valuation_date(), expiry)
    }

    /// Returns true if `expiry` is a business day in the model's calendar.
    #[inline]
    pub fn is_business_day(&self, expiry: Date) -> bool {
        self.calendar.is_business_day(expiry)
    }

    fn engine(
        &self,
        option: &EuropeanOption,
    ) -> Result<(BlackScholes<f64>, f64), AnalyticalError> {
        if option.expiry() <= self.valuation_date() {
            return Err(AnalyticalError::ExpiredOption {
                expiry: option.expiry().to_string(),
                valuation_date: self.valuation_date().to_string(),
            });
        }
        let t = self.time_to_expiry(option.expiry());
        let rate = self.curve.zero_rate(t)?;
        let sigma = self.surface.volatility(option.strike(), t)?;
        let bs = BlackScholes::new(self.snapshot.spot(), rate, sigma)?;
        Ok((bs, t))
    }

    /// Theoretical value of one option unit.
    ///
    /// # Errors
    /// - `AnalyticalError::ExpiredOption` if expiry is on or before the valuation date
    pub fn npv(&self, option: &EuropeanOption) -> Result<f64, AnalyticalError> {
        let (bs, t) = self.engine(option)?;
        Ok(bs.price(option.option_type(), option.strike(), t))
    }

    /// Delta: N(d₁) for calls, N(d₁) - 1 for puts.
    pub fn delta(&self, option: &EuropeanOption) -> Result<f64, AnalyticalError> {
        let (bs, t) = self.engine(option)?;
        Ok(bs.delta(option.option_type(), option.strike(), t))
    }

    /// Gamma: φ(d₁) / (S·σ·√T).
    pub fn gamma(&self, option: &EuropeanOption) -> Result<f64, AnalyticalError> {
        let (bs, t) = self.engine(option)?;
        Ok(bs.gamma(option.strike(), t))
    }

    /// Theta, or `None` where it is undefined.
    ///
    /// Undefined when any of these holds:
    /// - time to expiry is not finite or not positive
    /// - σ·√T is zero (zero volatility)
    /// - the closed-form result is not finite
    pub fn theta(&self, option: &EuropeanOption) -> Result<Option<f64>, AnalyticalError> {
        let (bs, t) = self.engine(option)?;
        Ok(defined_theta(&bs, option, t))
    }

    /// NPV, delta, gamma and theta in one pass.
    pub fn value(&self, option: &EuropeanOption) -> Result<OptionValuation, AnalyticalError> {
        let (bs, t) = self.engine(option)?;
        let option_type = option.option_type();
        let strike = option.strike();
        Ok(OptionValuation {
            npv: bs.price(option_type, strike, t),
            delta: bs.delta(option_type, strike, t),
            gamma: bs.gamma(strike, t),
            theta: defined_theta(&bs, option, t),
        })
    }
}

fn defined_theta(bs: &BlackScholes<f64>, option: &EuropeanOption, t: f64) -> Option<f64> {
    if !t.is_finite() || t <= 0.0 {
        return None;
    }
    if bs.volatility() * t.sqrt() == 0.0 {
        return None;
    }
    let theta = bs.theta(option.option_type(), option.strike(), t);
    theta.is_finite().then_some(theta)
}
