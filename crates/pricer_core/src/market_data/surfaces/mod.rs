//! Volatility surface abstractions.
//!
//! - [`VolatilitySurface`]: Implied volatility lookup by strike and expiry
//! - [`FlatVol`]: One volatility for every strike and expiry

mod flat;
mod traits;

pub use flat::FlatVol;
pub use traits::VolatilitySurface;
