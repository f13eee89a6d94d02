//! Leg screening before pricing.
//!
//! A leg is dropped from the aggregation, not failed, when its expiry cannot
//! be parsed or is on or before the valuation date. Every other defect is an
//! error raised elsewhere.

use std::fmt;

use pricer_core::types::Date;

use super::request::OptionLeg;

/// Why a leg was left out of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkipReason {
    /// Expiry is not a `YYYY-MM-DD` calendar date.
    UnparseableExpiry,
    /// Expiry is on or before the valuation date.
    Expired,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnparseableExpiry => write!(f, "unparseable expiry"),
            SkipReason::Expired => write!(f, "expired"),
        }
    }
}

/// Expiry of a leg that takes part in the scenario.
///
/// # Errors
/// The [`SkipReason`] when the leg must be left out.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::instruments::OptionType;
/// use pricer_risk::scenarios::{eligible_expiry, OptionLeg, SkipReason};
///
/// let today = Date::from_ymd(2025, 6, 2).unwrap();
/// let leg = OptionLeg::new(OptionType::Call, 100.0, "2025-06-02", 1.0);
/// assert_eq!(eligible_expiry(&leg, today), Err(SkipReason::Expired));
/// ```
pub fn eligible_expiry(leg: &OptionLeg, valuation_date: Date) -> Result<Date, SkipReason> {
    let expiry = Date::parse(leg.expiry.trim()).map_err(|_| SkipReason::UnparseableExpiry)?;
    if expiry <= valuation_date {
        return Err(SkipReason::Expired);
    }
    Ok(expiry)
}
