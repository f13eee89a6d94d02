//! Market data for single-underlying option pricing.
//!
//! # Components
//!
//! - [`curves`]: Yield curve trait and the flat risk-free curve
//! - [`surfaces`]: Volatility surface trait and the flat volatility surface
//! - [`snapshot`]: `MarketSnapshot`, the validated inputs a model is built from
//! - [`error`]: Market data error types (MarketDataError)
//!
//! Curves and surfaces are generic over `T: Float`; snapshots are `f64`.
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
//! use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
//!
//! let curve = FlatCurve::new(0.05_f64);
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - 0.951229).abs() < 1e-5);
//!
//! let vol_surface = FlatVol::new(0.20_f64);
//! assert_eq!(vol_surface.volatility(100.0, 1.0).unwrap(), 0.20);
//! ```

pub mod curves;
pub mod error;
pub mod snapshot;
pub mod surfaces;

pub use curves::{FlatCurve, YieldCurve};
pub use error::MarketDataError;
pub use snapshot::MarketSnapshot;
pub use surfaces::{FlatVol, VolatilitySurface};
