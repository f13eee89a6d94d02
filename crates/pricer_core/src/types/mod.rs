//! Core time and error types.
//!
//! This module provides:
//! - `time`: Date wrapper and day count conventions for year fractions
//! - `calendar`: Business day calendars (weekends only, TARGET)
//! - `error`: Structured error types for pricing and date operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DayCountConvention`] from `time`
//! - [`Calendar`] from `calendar`
//! - [`DateError`] from `error`

pub mod calendar;
pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use calendar::Calendar;
pub use error::DateError;
pub use time::{Date, DayCountConvention};
