//! Calendar month arithmetic for the projection engines.
//!
//! Every schedule in this crate steps one calendar month at a time and only
//! ever cares about year and month, so rather than dragging a full date
//! through the simulators we use a dedicated [`Month`] type. It orders
//! chronologically, steps in O(1), and round-trips through the `YYYY-MM`
//! text form used by scenario files. Conversion to a real [`jiff`] date
//! happens only at the edges (labels, validation).

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MonthError;

/// A specific calendar month, e.g. June 2030.
///
/// Field order gives the derived `Ord` chronological meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i16,
    month: i8,
}

impl Month {
    /// Create a month. Panics if `month` is outside `1..=12`.
    pub const fn new(year: i16, month: i8) -> Self {
        assert!(month >= 1 && month <= 12);
        Self { year, month }
    }

    #[inline]
    pub fn year(self) -> i16 {
        self.year
    }

    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    #[inline]
    pub fn is_january(self) -> bool {
        self.month == 1
    }

    /// The month immediately after this one.
    #[inline]
    pub fn next(self) -> Self {
        self.add_months(1)
    }

    /// Shift by a signed number of months.
    #[inline]
    pub fn add_months(self, months: i32) -> Self {
        let zero_based = self.year as i32 * 12 + (self.month as i32 - 1) + months;
        Self {
            year: zero_based.div_euclid(12) as i16,
            month: (zero_based.rem_euclid(12) + 1) as i8,
        }
    }

    #[inline]
    pub fn add_years(self, years: i32) -> Self {
        self.add_months(years * 12)
    }

    /// Signed count of months from `self` to `later`.
    #[inline]
    pub fn months_until(self, later: Month) -> i32 {
        (later.year as i32 * 12 + later.month as i32) - (self.year as i32 * 12 + self.month as i32)
    }

    /// The first day of this month as a civil date.
    pub fn first_day(self) -> Date {
        jiff::civil::date(self.year, self.month, 1)
    }

    /// Human-readable label, e.g. "Jun 2030".
    pub fn label(self) -> String {
        self.first_day().strftime("%b %Y").to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s.split_once('-').ok_or_else(|| MonthError::Format(s.to_string()))?;
        let year: i16 = year.parse().map_err(|_| MonthError::Format(s.to_string()))?;
        let month: i8 = month.parse().map_err(|_| MonthError::Format(s.to_string()))?;
        // Validates the month number and jiff's supported year range.
        Date::new(year, month, 1)?;
        Ok(Self { year, month })
    }
}

impl Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
