//! Call/put flag.

use std::fmt;
use std::str::FromStr;

/// Right conveyed by a vanilla option.
///
/// Serialised as `"CALL"` / `"PUT"`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let put: OptionType = "put".parse().unwrap();
/// assert_eq!(put, OptionType::Put);
/// assert_eq!(put.to_string(), "PUT");
/// assert!("STRADDLE".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum OptionType {
    /// Right to buy at the strike: max(S - K, 0)
    Call,
    /// Right to sell at the strike: max(K - S, 0)
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "CALL"),
            OptionType::Put => write!(f, "PUT"),
        }
    }
}

impl FromStr for OptionType {
    type Err = String;

    /// Case-insensitive: "CALL"/"C" or "PUT"/"P".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CALL" | "C" => Ok(OptionType::Call),
            "PUT" | "P" => Ok(OptionType::Put),
            _ => Err(format!("Unknown option type: {}", s)),
        }
    }
}
