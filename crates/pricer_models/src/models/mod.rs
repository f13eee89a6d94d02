//! Pricing models bound to market snapshots.
//!
//! - [`PricingModelFactory`]: Builds a model from a `MarketSnapshot`
//! - [`PricingModel`]: Flat curve + flat vol + Black-Scholes-Merton for one snapshot
//! - [`OptionValuation`]: NPV and Greeks of one option unit
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{EuropeanOption, OptionType};
//! use pricer_models::models::PricingModelFactory;
//!
//! let today = Date::from_ymd(2025, 1, 2).unwrap();
//! let factory = PricingModelFactory::new();
//! let base = factory.build(100.0, 0.01, 0.2, today).unwrap();
//! let shocked = factory.build(95.0, 0.01, 0.2, today).unwrap();
//!
//! let put = EuropeanOption::new(OptionType::Put, 100.0, today.add_days(90).unwrap()).unwrap();
//! assert!(shocked.npv(&put).unwrap() > base.npv(&put).unwrap());
//! ```

mod factory;
mod pricing_model;

pub use factory::PricingModelFactory;
pub use pricing_model::{OptionValuation, PricingModel};
