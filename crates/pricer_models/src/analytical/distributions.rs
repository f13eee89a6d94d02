//! Standard normal distribution functions.
//!
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! Both are generic over `T: Float`.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Complementary error function at double precision.
///
/// Evaluated in `f64` through `libm` and cast back to `T`.
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let value = x.to_f64().unwrap_or(f64::NAN);
    constant::<T>(libm::erfc(value))
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = erfc(-x / √2) / 2, accurate to double precision (relative error
/// near 1e-15, also deep in the lower tail). `Φ(+∞) = 1`, `Φ(-∞) = 0` and
/// `Φ(NaN)` is NaN.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0_f64) - 0.8413447460685429).abs() < 1e-14);
/// assert_eq!(norm_cdf(f64::INFINITY), 1.0);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let arg = -x / constant::<T>(std::f64::consts::SQRT_2);
    constant::<T>(0.5) * erfc(arg)
}

/// Standard normal probability density function.
///
/// φ(x) = exp(-x² / 2) / √(2π)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-10);
/// assert_eq!(norm_pdf(f64::NEG_INFINITY), 0.0);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    constant::<T>(FRAC_1_SQRT_2PI) * (-constant::<T>(0.5) * x * x).exp()
}
