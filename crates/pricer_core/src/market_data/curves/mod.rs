//! Discount curve abstractions.
//!
//! - [`YieldCurve`]: Discount factor and zero rate lookup
//! - [`FlatCurve`]: Single continuously compounded rate for every maturity

mod flat;
mod traits;

pub use flat::FlatCurve;
pub use traits::YieldCurve;
