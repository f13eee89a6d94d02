//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form valuation of European vanilla options.
//!
//! This crate provides:
//! - Option contracts (`EuropeanOption`, `OptionType`)
//! - Black-Scholes-Merton prices and Greeks over a generic float type
//! - Standard normal CDF/PDF
//! - `PricingModelFactory`, turning a `MarketSnapshot` into an immutable
//!   `PricingModel`
//!
//! ## Design Principles
//!
//! - **Value types**: models own no resources and are `Copy`
//! - **Explicit domains**: expired options and invalid strikes are errors,
//!   undefined theta is `None`
//! - **No lattice, no Monte Carlo**: closed form only

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
