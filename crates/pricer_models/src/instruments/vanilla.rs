//! European vanilla option contract.

use pricer_core::types::Date;

use super::option_type::OptionType;
use crate::analytical::AnalyticalError;

/// European call or put with a single strike and a calendar expiry.
///
/// The contract carries no quantity; position sizing belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuropeanOption {
    option_type: OptionType,
    strike: f64,
    expiry: Date,
}

impl EuropeanOption {
    /// Creates a European option.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidStrike` if strike is non-finite or <= 0
    pub fn new(
        option_type: OptionType,
        strike: f64,
        expiry: Date,
    ) -> Result<Self, AnalyticalError> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        Ok(Self {
            option_type,
            strike,
            expiry,
        })
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Expiry date.
    #[inline]
    pub fn expiry(&self) -> Date {
        self.expiry
    }
}
