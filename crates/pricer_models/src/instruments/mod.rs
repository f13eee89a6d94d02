//! European vanilla option definitions.
//!
//! - [`OptionType`]: Call or put
//! - [`EuropeanOption`]: Option type, strike and calendar expiry
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{EuropeanOption, OptionType};
//! use pricer_core::types::Date;
//!
//! let expiry = Date::from_ymd(2026, 6, 19).unwrap();
//! let put = EuropeanOption::new(OptionType::Put, 95.0, expiry).unwrap();
//! assert_eq!(put.option_type(), OptionType::Put);
//! assert_eq!(put.strike(), 95.0);
//! ```

mod option_type;
mod vanilla;

pub use option_type::OptionType;
pub use vanilla::EuropeanOption;
