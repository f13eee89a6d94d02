//! Beta-scaled spot shock scenarios.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Scenario Evaluator              │
//! ├──────────────────────────────────────────────┤
//! │  ScenarioRequest  - Market, shock, beta, legs│
//! │  eligible_expiry  - Leg skip policy          │
//! │  PricingModel x2  - Base and shocked spot    │
//! │  ScenarioResult   - Weighted totals + counts │
//! └──────────────────────────────────────────────┘
//! ```

mod evaluator;
mod filter;
mod request;
mod result;

pub use evaluator::{ScenarioEvaluator, ShockOutcome, DEFAULT_SHOCK_LADDER};
pub use filter::{eligible_expiry, SkipReason};
pub use request::{MarketInputs, OptionLeg, ScenarioRequest};
pub use result::{ScenarioResult, SkippedLegs};
