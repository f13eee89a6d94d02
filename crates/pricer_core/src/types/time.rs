//! Dates and day count conventions for option maturities.
//!
//! This module provides:
//! - `Date`: Calendar date wrapper around chrono::NaiveDate
//! - `DayCountConvention`: Year fraction conventions (ACT/365F, ACT/360)
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{Date, DayCountConvention};
//!
//! let today = Date::from_ymd(2024, 1, 1).unwrap();
//! let expiry = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! // 182 days / 365
//! let yf = DayCountConvention::Actual365Fixed.year_fraction_dates(today, expiry);
//! assert!((yf - 0.4986).abs() < 0.001);
//! ```

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Calendar date without a time-of-day component.
///
/// Expiries and valuation dates are exchanged as ISO 8601 strings
/// (`YYYY-MM-DD`); `Date::parse` is the only accepted wire format.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let later = date.add_days(10).unwrap();
/// assert_eq!(later - date, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date in `YYYY-MM-DD` form.
    ///
    /// Impossible calendar dates such as `2024-02-30` are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::parse("2024-06-15").is_ok());
    /// assert!(Date::parse("2024-02-30").is_err());
    /// assert!(Date::parse("15/06/2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the date shifted by `days` calendar days (negative moves back).
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("{} {:+} days", self, days)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the day of the year (1-366).
    pub fn ordinal(&self) -> u32 {
        self.0.ordinal()
    }

    /// Returns true on Saturdays and Sundays.
    #[inline]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// Day Count Convention (year fraction convention).
///
/// # Variants
/// - `Actual365Fixed`: Actual days / 365 (equity and FX options)
/// - `Actual360`: Actual days / 360 (money market instruments)
///
/// ```
/// use pricer_core::types::time::{Date, DayCountConvention};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 1, 1).unwrap();
///
/// // 2024 is a leap year: 366 / 365
/// let yf = DayCountConvention::Actual365Fixed.year_fraction_dates(start, end);
/// assert!((yf - 1.0027).abs() < 1e-4);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    Actual365Fixed,

    /// Actual/360: actual_days / 360.0
    Actual360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// ```
    /// use pricer_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Actual365Fixed.name(), "ACT/365F");
    /// assert_eq!(DayCountConvention::Actual360.name(), "ACT/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual365Fixed => "ACT/365F",
            DayCountConvention::Actual360 => "ACT/360",
        }
    }

    /// Days in the denominator of the year fraction.
    #[inline]
    pub fn days_per_year(&self) -> f64 {
        match self {
            DayCountConvention::Actual365Fixed => 365.0,
            DayCountConvention::Actual360 => 360.0,
        }
    }

    /// Year fraction between two dates.
    ///
    /// Negative when `end` precedes `start`, so expired maturities are
    /// visible to the caller instead of being clamped.
    pub fn year_fraction_dates(&self, start: Date, end: Date) -> f64 {
        (end - start) as f64 / self.days_per_year()
    }
}

impl FromStr for DayCountConvention {
    type Err = String;

    /// Parses day count convention from string (case-insensitive).
    ///
    /// Accepted aliases:
    /// - ACT/365F: "ACT/365F", "ACT/365", "Actual/365 Fixed", "A365F"
    /// - ACT/360: "ACT/360", "Actual/360", "A360"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365F" | "ACT365" | "ACTUAL365FIXED" | "ACTUAL365" | "A365F" | "A365" => {
                Ok(DayCountConvention::Actual365Fixed)
            }
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::Actual360),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    // ========================================
    // Date Tests
    // ========================================

    #[test]
    fn test_date_from_ymd_valid() {
        let d = date(2024, 6, 15);
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 6);
        assert_eq!(d.day(), 15);
    }

    #[test]
    fn test_date_from_ymd_invalid() {
        match Date::from_ymd(2023, 2, 29).unwrap_err() {
            DateError::InvalidDate { year, month, day } => {
                assert_eq!((year, month, day), (2023, 2, 29));
            }
            _ => panic!("Expected InvalidDate"),
        }
    }

    #[test]
    fn test_date_parse_valid() {
        let d = Date::parse("2025-03-21").unwrap();
        assert_eq!(d, date(2025, 3, 21));
    }

    #[test]
    fn test_date_parse_rejects_impossible_dates() {
        assert!(Date::parse("2024-02-30").is_err());
        assert!(Date::parse("2024-13-01").is_err());
        assert!(Date::parse("2024-04-31").is_err());
    }

    #[test]
    fn test_date_parse_rejects_other_formats() {
        for s in ["", "not-a-date", "21/03/2025", "2025-03-21T00:00:00", "20250321"] {
            match Date::parse(s).unwrap_err() {
                DateError::ParseError(_) => {}
                _ => panic!("Expected ParseError for {:?}", s),
            }
        }
    }

    #[test]
    fn test_date_display_round_trips_through_parse() {
        let d = date(2024, 1, 5);
        assert_eq!(d.to_string(), "2024-01-05");
        assert_eq!(Date::parse(&d.to_string()).unwrap(), d);
    }

    #[test]
    fn test_date_subtraction() {
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 11);
        assert_eq!(end - start, 10);
        assert_eq!(start - end, -10);
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        assert_eq!(date(2024, 1, 31).add_days(1).unwrap(), date(2024, 2, 1));
        assert_eq!(date(2024, 12, 31).add_days(1).unwrap(), date(2025, 1, 1));
        assert_eq!(date(2024, 3, 1).add_days(-1).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_add_days_out_of_range() {
        match date(2024, 1, 1).add_days(i64::MAX).unwrap_err() {
            DateError::OutOfRange(_) => {}
            _ => panic!("Expected OutOfRange"),
        }
    }

    #[test]
    fn test_weekend_detection() {
        // 2024-06-15 is a Saturday
        assert!(date(2024, 6, 15).is_weekend());
        assert!(date(2024, 6, 16).is_weekend());
        assert!(!date(2024, 6, 17).is_weekend());
        assert_eq!(date(2024, 6, 17).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_date_ordering() {
        assert!(date(2024, 1, 1) < date(2024, 1, 2));
        assert!(date(2025, 1, 1) > date(2024, 12, 31));
    }

    // ========================================
    // Day Count Tests
    // ========================================

    #[test]
    fn test_act_365f_known_dates() {
        let yf = DayCountConvention::Actual365Fixed
            .year_fraction_dates(date(2024, 1, 1), date(2024, 7, 1));
        assert_relative_eq!(yf, 182.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_act_360_known_dates() {
        let yf =
            DayCountConvention::Actual360.year_fraction_dates(date(2024, 1, 1), date(2024, 7, 1));
        assert_relative_eq!(yf, 182.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn test_year_fraction_same_date_is_zero() {
        let d = date(2024, 5, 5);
        assert_eq!(
            DayCountConvention::Actual365Fixed.year_fraction_dates(d, d),
            0.0
        );
    }

    #[test]
    fn test_year_fraction_negative_when_reversed() {
        let yf = DayCountConvention::Actual365Fixed
            .year_fraction_dates(date(2024, 7, 1), date(2024, 1, 1));
        assert_relative_eq!(yf, -182.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dcc_name_and_display() {
        assert_eq!(DayCountConvention::Actual365Fixed.to_string(), "ACT/365F");
        assert_eq!(DayCountConvention::Actual360.to_string(), "ACT/360");
        assert_eq!(DayCountConvention::default(), DayCountConvention::Actual365Fixed);
    }

    #[test]
    fn test_dcc_from_str() {
        assert_eq!(
            "act/365f".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Actual365Fixed
        );
        assert_eq!(
            "Actual/365 Fixed".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Actual365Fixed
        );
        assert_eq!(
            "A360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Actual360
        );
        assert!("30/360".parse::<DayCountConvention>().is_err());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_date_serde_is_iso_string() {
            let d = date(2024, 6, 15);
            let json = serde_json::to_string(&d).unwrap();
            assert_eq!(json, "\"2024-06-15\"");
            let back: Date = serde_json::from_str(&json).unwrap();
            assert_eq!(back, d);
        }

        #[test]
        fn test_dcc_serde_accepts_alias() {
            let dcc: DayCountConvention = serde_json::from_str("\"ACT/365\"").unwrap();
            assert_eq!(dcc, DayCountConvention::Actual365Fixed);
            assert_eq!(serde_json::to_string(&dcc).unwrap(), "\"ACT/365F\"");
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_date() -> impl Strategy<Value = Date> {
            (1990i32..2100, 1u32..=12, 1u32..=28)
                .prop_map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_year_fraction_antisymmetric(a in arb_date(), b in arb_date()) {
                let dcc = DayCountConvention::Actual365Fixed;
                let forward = dcc.year_fraction_dates(a, b);
                let backward = dcc.year_fraction_dates(b, a);
                prop_assert!((forward + backward).abs() < 1e-12);
            }

            #[test]
            fn test_year_fraction_monotonic(a in arb_date(), days in 0i64..5000) {
                let b = a.add_days(days).unwrap();
                let c = b.add_days(1).unwrap();
                let dcc = DayCountConvention::Actual365Fixed;
                prop_assert!(dcc.year_fraction_dates(a, c) > dcc.year_fraction_dates(a, b));
            }

            #[test]
            fn test_add_days_inverts_subtraction(a in arb_date(), days in -10_000i64..10_000) {
                let b = a.add_days(days).unwrap();
                prop_assert_eq!(b - a, days);
            }
        }
    }
}
