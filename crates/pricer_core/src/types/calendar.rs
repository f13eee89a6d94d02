//! Business day calendars.
//!
//! Pricing models carry a calendar alongside their day count convention.
//! Year fractions stay on calendar days (ACT/365F); the calendar is used to
//! flag maturities that do not fall on a business day.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{Calendar, Date};
//!
//! // Good Friday 2024
//! let good_friday = Date::from_ymd(2024, 3, 29).unwrap();
//! assert!(Calendar::Target.is_holiday(good_friday));
//! assert!(Calendar::WeekendsOnly.is_business_day(good_friday));
//! ```

use chrono::NaiveDate;
use std::fmt;

use super::time::Date;

/// Business day calendar.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Calendar {
    /// Saturdays and Sundays are the only non-business days.
    WeekendsOnly,

    /// Euro area TARGET2 settlement calendar.
    ///
    /// Holidays: New Year's Day, Good Friday, Easter Monday, Labour Day (1 May),
    /// Christmas Day and 26 December.
    #[default]
    Target,
}

impl Calendar {
    /// Returns the calendar name.
    pub fn name(&self) -> &'static str {
        match self {
            Calendar::WeekendsOnly => "WeekendsOnly",
            Calendar::Target => "TARGET",
        }
    }

    /// Returns true if `date` is neither a weekend nor a holiday.
    #[inline]
    pub fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.is_holiday(date)
    }

    /// Returns true if `date` is a holiday of this calendar.
    ///
    /// Weekends are not holidays; see [`Calendar::is_business_day`].
    pub fn is_holiday(&self, date: Date) -> bool {
        match self {
            Calendar::WeekendsOnly => false,
            Calendar::Target => is_target_holiday(date),
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn is_target_holiday(date: Date) -> bool {
    if matches!(
        (date.month(), date.day()),
        (1, 1) | (5, 1) | (12, 25) | (12, 26)
    ) {
        return true;
    }

    match easter_sunday(date.year()) {
        Some(easter) => {
            let offset = date.into_inner() - easter;
            // Good Friday and Easter Monday
            matches!(offset.num_days(), -2 | 1)
        }
        None => false,
    }
}

/// Gregorian Easter Sunday (Meeus/Jones/Butcher).
fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
