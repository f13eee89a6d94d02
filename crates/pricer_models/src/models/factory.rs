//! Construction of pricing models from market snapshots.

use pricer_core::market_data::{MarketDataError, MarketSnapshot};
use pricer_core::types::{Calendar, Date, DayCountConvention};

use super::pricing_model::PricingModel;

/// Builds [`PricingModel`]s with a fixed set of conventions.
///
/// Defaults to ACT/365F and the TARGET calendar.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{Calendar, Date, DayCountConvention};
/// use pricer_models::models::PricingModelFactory;
///
/// let today = Date::from_ymd(2025, 1, 2).unwrap();
/// let model = PricingModelFactory::new().build(100.0, -0.002, 0.18, today).unwrap();
/// assert_eq!(model.day_count(), DayCountConvention::Actual365Fixed);
/// assert_eq!(model.calendar(), Calendar::Target);
///
/// assert!(PricingModelFactory::new().build(0.0, 0.01, 0.2, today).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingModelFactory {
    day_count: DayCountConvention,
    calendar: Calendar,
}

impl PricingModelFactory {
    /// Factory with ACT/365F and TARGET.
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory with explicit conventions.
    pub fn with_conventions(day_count: DayCountConvention, calendar: Calendar) -> Self {
        Self {
            day_count,
            calendar,
        }
    }

    /// Model for an already validated snapshot.
    pub fn build_model(&self, snapshot: &MarketSnapshot) -> PricingModel {
        PricingModel::new(*snapshot, self.day_count, self.calendar)
    }

    /// Validate raw market fields, then build the model.
    ///
    /// # Errors
    /// Any `MarketDataError` raised by [`MarketSnapshot::new`].
    pub fn build(
        &self,
        spot: f64,
        rate: f64,
        volatility: f64,
        valuation_date: Date,
    ) -> Result<PricingModel, MarketDataError> {
        let snapshot = MarketSnapshot::new(spot, rate, volatility, valuation_date)?;
        Ok(self.build_model(&snapshot))
    }
}
