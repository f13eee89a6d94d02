//! # pricer_core: Market Foundation for Scenario Risk
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Time types: `Date`, `DayCountConvention` (`types::time`)
//! - Business calendars: `Calendar` with the TARGET holiday set (`types::calendar`)
//! - Error types: `DateError` (`types::error`)
//! - Flat term structures: `FlatCurve`, `FlatVol` (`market_data`)
//! - The immutable market state a pricing model is bound to: `MarketSnapshot`
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketSnapshot;
//! use pricer_core::types::{Calendar, Date, DayCountConvention};
//!
//! let today = Date::from_ymd(2024, 1, 2).unwrap();
//! let expiry = Date::from_ymd(2024, 7, 1).unwrap();
//! let yf = DayCountConvention::Actual365Fixed.year_fraction_dates(today, expiry);
//! assert!((yf - 0.4959).abs() < 1e-3);
//!
//! assert!(Calendar::Target.is_business_day(today));
//!
//! let snapshot = MarketSnapshot::new(100.0, 0.01, 0.2, today).unwrap();
//! assert_eq!(snapshot.spot(), 100.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Date`, `MarketSnapshot` and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
