//! # Pricer Risk (L4: Application)
//!
//! Scenario PnL and Greeks for books of European vanilla options under a
//! beta-scaled spot shock.
//!
//! This crate provides:
//! - Scenario requests, leg screening and the `ScenarioEvaluator`
//! - Skip accounting that tells an empty book from a fully skipped one
//! - Rayon-parallel shock ladders
//! - Multi-position portfolio analysis over a `MarketDataProvider`
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  scenarios/  - Request, skip policy,   │
//! │               evaluator, ladder         │
//! │  analysis/   - Providers, positions,   │
//! │               per-ticker metrics        │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  PricingModelFactory, Black-Scholes     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::Date;
//! use pricer_models::instruments::OptionType;
//! use pricer_risk::scenarios::{MarketInputs, OptionLeg, ScenarioEvaluator, ScenarioRequest};
//!
//! let evaluator = ScenarioEvaluator::with_valuation_date(Date::from_ymd(2025, 1, 2).unwrap());
//! let request = ScenarioRequest::new(
//!     MarketInputs::new(100.0, 0.01, 0.2),
//!     0.0,
//!     1.0,
//!     vec![OptionLeg::new(OptionType::Call, 100.0, "2026-01-02", 1.0)],
//! );
//!
//! let result = evaluator.evaluate(&request).unwrap();
//! assert_eq!(result.pnl, 0.0);
//! assert!(result.delta > 0.5 && result.delta < 0.7);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analysis;
mod error;
pub mod scenarios;

pub use error::ScenarioError;
pub use scenarios::{ScenarioEvaluator, ScenarioRequest, ScenarioResult};
