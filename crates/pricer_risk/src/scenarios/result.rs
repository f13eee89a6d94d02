//! Aggregated scenario output.

use pricer_models::models::OptionValuation;

use super::filter::SkipReason;

/// Number of legs left out, by reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedLegs {
    /// Expiry could not be parsed
    pub unparseable_expiry: usize,
    /// Expiry on or before the valuation date
    pub expired: usize,
}

impl SkippedLegs {
    /// Total legs skipped.
    #[inline]
    pub fn total(&self) -> usize {
        self.unparseable_expiry + self.expired
    }

    /// Count for one reason.
    pub fn count(&self, reason: SkipReason) -> usize {
        match reason {
            SkipReason::UnparseableExpiry => self.unparseable_expiry,
            SkipReason::Expired => self.expired,
        }
    }

    fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::UnparseableExpiry => self.unparseable_expiry += 1,
            SkipReason::Expired => self.expired += 1,
        }
    }
}

/// Quantity-weighted totals over the legs that were priced.
///
/// `pnl` is the sum of `(shocked NPV - base NPV) * quantity`; `delta`,
/// `gamma` and `theta` come from the base model. Legs with undefined theta
/// still contribute PnL, delta and gamma and are counted in
/// `theta_excluded`.
///
/// With zero volatility gamma is NaN and is carried into the totals as is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioResult {
    /// Scenario profit and loss
    pub pnl: f64,
    /// Base delta
    pub delta: f64,
    /// Base gamma
    pub gamma: f64,
    /// Base theta (undefined legs contribute zero)
    pub theta: f64,
    /// Legs that were priced
    pub legs_priced: usize,
    /// Legs left out of the totals
    pub legs_skipped: SkippedLegs,
    /// Priced legs whose theta was undefined
    pub theta_excluded: usize,
}

impl ScenarioResult {
    /// True only when the request carried no legs at all.
    pub fn is_empty_book(&self) -> bool {
        self.leg_count() == 0
    }

    /// True when there were legs and none of them was priced.
    ///
    /// All-zero totals are ambiguous on their own; this separates a book
    /// whose every leg was dropped from a genuinely empty one.
    pub fn all_legs_skipped(&self) -> bool {
        self.legs_priced == 0 && self.legs_skipped.total() > 0
    }

    /// Legs seen, priced or skipped.
    #[inline]
    pub fn leg_count(&self) -> usize {
        self.legs_priced + self.legs_skipped.total()
    }

    pub(crate) fn skip(&mut self, reason: SkipReason) {
        self.legs_skipped.record(reason);
    }

    pub(crate) fn accumulate(&mut self, base: &OptionValuation, shocked_npv: f64, quantity: f64) {
        self.pnl += (shocked_npv - base.npv) * quantity;
        self.delta += base.delta * quantity;
        self.gamma += base.gamma * quantity;
        match base.theta {
            Some(theta) => self.theta += theta * quantity,
            None => self.theta_excluded += 1,
        }
        self.legs_priced += 1;
    }
}
