//! Black-Scholes-Merton pricing for European options (no dividend yield).
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate inputs
//!
//! σ = 0 is accepted. With T > 0 the formulas are evaluated as written:
//! d₁ becomes ±∞ (or NaN when ln(S/K) + rT = 0), prices reduce to the
//! discounted forward intrinsic value and gamma is NaN. Nothing is coerced.

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::OptionType;

#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

#[inline]
fn at_expiry<T: Float>(expiry: T) -> bool {
    expiry <= constant(1e-10)
}

/// Black-Scholes-Merton model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot is non-finite or <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility is non-finite or < 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, -0.1).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if !spot.is_finite() || spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !volatility.is_finite() || volatility < zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// At expiry returns ±100 (or 0 at the money) so `N(d₁)` is the exercise
    /// indicator.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        if at_expiry(expiry) {
            let large = constant::<T>(100.0);
            return if self.spot > strike {
                large
            } else if self.spot < strike {
                -large
            } else {
                T::zero()
            };
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift =
            (self.rate + constant::<T>(0.5) * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        if at_expiry(expiry) {
            return self.d1(strike, expiry);
        }
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European option value for `option_type`.
    ///
    /// Returns intrinsic value at expiry.
    #[inline]
    pub fn price(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }

    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if at_expiry(expiry) {
            return (self.spot - strike).max(T::zero());
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if at_expiry(expiry) {
            return (strike - self.spot).max(T::zero());
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        let n_d1 = norm_cdf(self.d1(strike, expiry));
        match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - T::one(),
        }
    }

    /// Gamma (∂²V/∂S²) = φ(d₁) / (S·σ·√T), same for calls and puts.
    ///
    /// Zero at expiry.
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        if at_expiry(expiry) {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Theta (∂V/∂t), per year of calendar time.
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    ///
    /// Undefined at expiry: returns NaN when T is not positive.
    #[inline]
    pub fn theta(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        if expiry.is_nan() || expiry <= T::zero() {
            return T::nan();
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        let decay =
            -(self.spot * self.volatility * norm_pdf(d1)) / (constant::<T>(2.0) * sqrt_t);
        let carry = self.rate * strike * discount;

        match option_type {
            OptionType::Call => decay - carry * norm_cdf(d2),
            OptionType::Put => decay + carry * norm_cdf(-d2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm() -> BlackScholes<f64> {
        BlackScholes::new(100.0, 0.05, 0.2).unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = atm();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot() {
        for spot in [0.0, -100.0, f64::NAN] {
            match BlackScholes::new(spot, 0.05, 0.2).unwrap_err() {
                AnalyticalError::InvalidSpot { .. } => {}
                _ => panic!("Expected InvalidSpot error"),
            }
        }
    }

    #[test]
    fn test_new_invalid_volatility_negative() {
        match BlackScholes::new(100.0_f64, 0.05, -0.2).unwrap_err() {
            AnalyticalError::InvalidVolatility { volatility } => assert_eq!(volatility, -0.2),
            _ => panic!("Expected InvalidVolatility error"),
        }
    }

    #[test]
    fn test_new_zero_volatility_and_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_ok());
        assert!(BlackScholes::new(100.0_f64, -0.01, 0.2).is_ok());
    }

    // ==========================================================
    // d1 / d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_d2_atm() {
        let bs = atm();
        // d1 = (0 + 0.07) / 0.2 = 0.35
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.35, epsilon = 1e-12);
        assert_relative_eq!(bs.d2(100.0, 1.0), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_at_expiry_is_exercise_indicator() {
        let bs = atm();
        assert!(bs.d1(90.0, 0.0) > 0.0);
        assert!(bs.d1(110.0, 0.0) < 0.0);
        assert_eq!(bs.d1(100.0, 0.0), 0.0);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_price_reference_values() {
        let bs = atm();
        assert_relative_eq!(bs.price_call(100.0, 1.0), 10.4506, epsilon = 1e-3);
        assert_relative_eq!(bs.price_put(100.0, 1.0), 5.5735, epsilon = 1e-3);
        assert_eq!(
            bs.price(OptionType::Call, 100.0, 1.0),
            bs.price_call(100.0, 1.0)
        );
        assert_eq!(bs.price(OptionType::Put, 100.0, 1.0), bs.price_put(100.0, 1.0));
    }

    #[test]
    fn test_price_at_expiry_is_intrinsic() {
        let bs = atm();
        assert_eq!(bs.price_call(90.0, 0.0), 10.0);
        assert_eq!(bs.price_call(110.0, 0.0), 0.0);
        assert_eq!(bs.price_put(110.0, 0.0), 10.0);
        assert_eq!(bs.price_put(90.0, 0.0), 0.0);
    }

    #[test]
    fn test_put_call_parity_various_inputs() {
        for (rate, strike, expiry) in [
            (0.05, 80.0, 0.5),
            (0.01, 100.0, 1.0),
            (-0.005, 120.0, 2.0),
            (0.03, 100.0, 0.05),
        ] {
            let bs = BlackScholes::new(100.0, rate, 0.25).unwrap();
            let lhs = bs.price_call(strike, expiry) - bs.price_put(strike, expiry);
            let rhs = 100.0 - strike * (-rate * expiry).exp();
            assert_relative_eq!(lhs, rhs, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_volatility_prices_discounted_forward_intrinsic() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap();
        let expected = 100.0 - 90.0 * (-0.05_f64).exp();
        assert_relative_eq!(bs.price_call(90.0, 1.0), expected, epsilon = 1e-12);
        assert_eq!(bs.price_put(90.0, 1.0), 0.0);
    }

    #[test]
    fn test_zero_volatility_gamma_is_nan() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap();
        assert!(bs.gamma(90.0, 1.0).is_nan());
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_delta_bounds_and_relationship() {
        let bs = atm();
        for strike in [70.0, 100.0, 130.0] {
            let call = bs.delta(OptionType::Call, strike, 1.0);
            let put = bs.delta(OptionType::Put, strike, 1.0);
            assert!((0.0..=1.0).contains(&call));
            assert!((-1.0..=0.0).contains(&put));
            assert_relative_eq!(call - put, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_delta_vs_finite_diff() {
        let h = 0.01;
        let up = BlackScholes::new(100.0 + h, 0.05, 0.2).unwrap();
        let down = BlackScholes::new(100.0 - h, 0.05, 0.2).unwrap();
        for option_type in [OptionType::Call, OptionType::Put] {
            let fd = (up.price(option_type, 105.0, 1.0) - down.price(option_type, 105.0, 1.0))
                / (2.0 * h);
            assert_relative_eq!(fd, atm().delta(option_type, 105.0, 1.0), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let h = 1.0;
        let up = BlackScholes::new(100.0 + h, 0.05, 0.2).unwrap();
        let down = BlackScholes::new(100.0 - h, 0.05, 0.2).unwrap();
        let fd = (up.delta(OptionType::Call, 100.0, 1.0)
            - down.delta(OptionType::Call, 100.0, 1.0))
            / (2.0 * h);
        assert_relative_eq!(fd, atm().gamma(100.0, 1.0), epsilon = 1e-4);
    }

    #[test]
    fn test_theta_vs_finite_diff_in_expiry() {
        // dV/dt = -dV/dT
        let bs = atm();
        let h = 1e-3;
        for option_type in [OptionType::Call, OptionType::Put] {
            let longer = bs.price(option_type, 100.0, 1.0 + h);
            let shorter = bs.price(option_type, 100.0, 1.0 - h);
            let fd = -(longer - shorter) / (2.0 * h);
            assert_relative_eq!(fd, bs.theta(option_type, 100.0, 1.0), epsilon = 1e-2);
        }
    }

    #[test]
    fn test_theta_call_negative_atm() {
        assert!(atm().theta(OptionType::Call, 100.0, 1.0) < 0.0);
    }

    #[test]
    fn test_theta_undefined_at_expiry() {
        let bs = atm();
        assert!(bs.theta(OptionType::Call, 100.0, 0.0).is_nan());
        assert!(bs.theta(OptionType::Put, 100.0, -0.5).is_nan());
        assert!(bs.theta(OptionType::Put, 100.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_gamma_zero_at_expiry() {
        assert_eq!(atm().gamma(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::new(100.0_f32, 0.05, 0.2).unwrap();
        assert!((bs.price_call(100.0, 1.0) - 10.4506).abs() < 1e-2);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(300))]

            #[test]
            fn test_price_non_decreasing_in_volatility(
                strike in 80.0f64..120.0,
                expiry in 0.25f64..2.0,
                sigma in 0.1f64..0.5,
                bump in 0.01f64..0.2,
            ) {
                let low = BlackScholes::new(100.0, 0.02, sigma).unwrap();
                let high = BlackScholes::new(100.0, 0.02, sigma + bump).unwrap();
                for option_type in [OptionType::Call, OptionType::Put] {
                    prop_assert!(
                        high.price(option_type, strike, expiry)
                            >= low.price(option_type, strike, expiry) - 1e-6
                    );
                }
            }

            #[test]
            fn test_put_call_parity(
                spot in 50.0f64..150.0,
                strike in 50.0f64..150.0,
                rate in -0.02f64..0.1,
                sigma in 0.05f64..0.8,
                expiry in 0.01f64..5.0,
            ) {
                let bs = BlackScholes::new(spot, rate, sigma).unwrap();
                let lhs = bs.price_call(strike, expiry) - bs.price_put(strike, expiry);
                let rhs = spot - strike * (-rate * expiry).exp();
                prop_assert!((lhs - rhs).abs() < 1e-6);
            }
        }
    }
}
