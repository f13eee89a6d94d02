//! Closed-form pricing for European options.
//!
//! - Black-Scholes-Merton prices and Greeks (Delta, Gamma, Theta)
//! - Standard normal CDF/PDF
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Works with `f64` and `f32`
//! - **Self-contained**: erfc-based CDF, no external quant library
//! - **No silent coercion**: degenerate inputs propagate NaN instead of
//!   being clamped

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
