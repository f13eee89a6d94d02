//! Beta-scaled scenario evaluation.
//!
//! For each request the evaluator builds two [`PricingModel`]s from the same
//! factory, one on the base spot and one on the shocked spot, prices every
//! eligible leg under both and sums the quantity-weighted results.

use pricer_core::types::Date;
use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::EuropeanOption;
use pricer_models::models::{OptionValuation, PricingModel, PricingModelFactory};
use rayon::prelude::*;
use tracing::debug;

use super::filter::eligible_expiry;
use super::request::{OptionLeg, ScenarioRequest};
use super::result::ScenarioResult;
use crate::error::ScenarioError;

/// Shocks used when a caller does not give a ladder.
pub const DEFAULT_SHOCK_LADDER: [f64; 5] = [-0.10, -0.05, 0.0, 0.05, 0.10];

/// One rung of a shock ladder.
#[derive(Debug, Clone, PartialEq)]
pub struct ShockOutcome {
    /// Market move applied
    pub shock: f64,
    /// Scenario totals under that move
    pub result: Result<ScenarioResult, ScenarioError>,
}

/// Stateless scenario evaluator.
///
/// Without a pinned valuation date every call anchors both models at the
/// local date on which it runs.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::instruments::OptionType;
/// use pricer_risk::scenarios::{MarketInputs, OptionLeg, ScenarioEvaluator, ScenarioRequest};
///
/// let evaluator = ScenarioEvaluator::with_valuation_date(Date::from_ymd(2025, 1, 2).unwrap());
/// let request = ScenarioRequest::new(
///     MarketInputs::new(100.0, 0.01, 0.2),
///     -0.05,
///     1.0,
///     vec![
///         OptionLeg::new(OptionType::Call, 100.0, "2026-01-02", 1.0),
///         OptionLeg::new(OptionType::Put, 100.0, "garbage", 1.0),
///     ],
/// );
/// let result = evaluator.evaluate(&request).unwrap();
/// assert!(result.pnl < 0.0);
/// assert_eq!(result.legs_priced, 1);
/// assert_eq!(result.legs_skipped.unparseable_expiry, 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioEvaluator {
    factory: PricingModelFactory,
    valuation_date: Option<Date>,
}

impl ScenarioEvaluator {
    /// Evaluator anchored at today's date at call time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator pinned to a fixed valuation date.
    pub fn with_valuation_date(valuation_date: Date) -> Self {
        Self {
            factory: PricingModelFactory::new(),
            valuation_date: Some(valuation_date),
        }
    }

    /// Pinned valuation date, if any.
    pub fn pinned_date(&self) -> Option<Date> {
        self.valuation_date
    }

    /// Valuation date the next evaluation would use.
    pub fn valuation_date(&self) -> Date {
        self.valuation_date.unwrap_or_else(Date::today)
    }

    /// Evaluates one scenario.
    ///
    /// Legs with an unparseable or past expiry are skipped and counted; see
    /// [`ScenarioResult`].
    ///
    /// # Errors
    /// - `ScenarioError::InvalidRequest` for non-finite shock, beta or
    ///   quantity, or a strike that is not finite and positive
    /// - `ScenarioError::InvalidMarketData` for an invalid base market or a
    ///   shocked spot that is not positive
    /// - `ScenarioError::Computation` if a price or Greek is not finite
    ///   under positive volatility
    pub fn evaluate(&self, request: &ScenarioRequest) -> Result<ScenarioResult, ScenarioError> {
        request.validate()?;

        let valuation_date = self.valuation_date();
        let base = request.market.snapshot(valuation_date)?;
        let shocked = base.with_spot(request.shocked_spot())?;
        let base_model = self.factory.build_model(&base);
        let shocked_model = self.factory.build_model(&shocked);

        let mut result = ScenarioResult::default();
        for (index, leg) in request.legs.iter().enumerate() {
            let expiry = match eligible_expiry(leg, valuation_date) {
                Ok(expiry) => expiry,
                Err(reason) => {
                    debug!(leg = index, expiry = %leg.expiry, %reason, "skipping leg");
                    result.skip(reason);
                    continue;
                }
            };
            if !base_model.is_business_day(expiry) {
                debug!(leg = index, %expiry, "expiry is not a business day");
            }

            let option = EuropeanOption::new(leg.option_type, leg.strike, expiry)?;
            let (valuation, shocked_npv) = price_leg(&base_model, &shocked_model, &option)?;
            check_finite(index, leg, &base_model, &valuation, shocked_npv)?;
            result.accumulate(&valuation, shocked_npv, leg.quantity);
        }

        debug!(
            %valuation_date,
            spot = base.spot(),
            shocked_spot = shocked.spot(),
            legs_priced = result.legs_priced,
            legs_skipped = result.legs_skipped.total(),
            pnl = result.pnl,
            "scenario evaluated"
        );
        Ok(result)
    }

    /// Evaluates the same book under each shock, in parallel.
    ///
    /// Output order follows `shocks`. All rungs share one valuation date
    /// even when the evaluator is not pinned.
    pub fn evaluate_ladder(&self, base: &ScenarioRequest, shocks: &[f64]) -> Vec<ShockOutcome> {
        let evaluator = Self {
            valuation_date: Some(self.valuation_date()),
            ..*self
        };
        shocks
            .par_iter()
            .map(|&shock| ShockOutcome {
                shock,
                result: evaluator.evaluate(&base.with_shock(shock)),
            })
            .collect()
    }
}

fn price_leg(
    base_model: &PricingModel,
    shocked_model: &PricingModel,
    option: &EuropeanOption,
) -> Result<(OptionValuation, f64), ScenarioError> {
    let valuation = base_model.value(option)?;
    let shocked_npv = shocked_model.npv(option)?;
    Ok((valuation, shocked_npv))
}

// Zero volatility legitimately yields NaN gamma; only positive vol is checked.
fn check_finite(
    index: usize,
    leg: &OptionLeg,
    model: &PricingModel,
    valuation: &OptionValuation,
    shocked_npv: f64,
) -> Result<(), AnalyticalError> {
    if model.snapshot().volatility() == 0.0 {
        return Ok(());
    }
    let values = [
        ("base NPV", valuation.npv),
        ("shocked NPV", shocked_npv),
        ("delta", valuation.delta),
        ("gamma", valuation.gamma),
    ];
    match values.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, value)) => Err(AnalyticalError::NumericalInstability {
            message: format!(
                "leg {index} ({} K={} {}): {name} = {value}",
                leg.option_type, leg.strike, leg.expiry
            ),
        }),
        None => Ok(()),
    }
}
