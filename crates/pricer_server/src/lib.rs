//! REST API server for RiskGo scenario analysis
//!
//! This crate exposes the scenario evaluator and the portfolio analyzer over
//! HTTP:
//! - `GET /health`, `GET /ready`
//! - `POST /api/v1/scenario`
//! - `POST /api/analyze_portfolio`

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

// Re-export pricer dependencies for integration
pub use pricer_core;
pub use pricer_models;
pub use pricer_risk;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
