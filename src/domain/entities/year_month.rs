use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use derive_more::Display;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A calendar month written as `YYYY-MM`.
///
/// Ordering is chronological: the year is compared first, then the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum YearMonthError {
    #[display("Expected YYYY-MM, got {_0:?}")]
    InvalidFormat(String),

    #[display("Month must be between 1 and 12, got {_0}")]
    MonthOutOfRange(u32),

    #[display("Year must be between 0 and 9999, got {_0}")]
    YearOutOfRange(i32),
}

impl std::error::Error for YearMonthError {}

const MAX_YEAR: i32 = 9999;

impl YearMonth {
    /// Builds a value from trusted literals. Untrusted input goes through
    /// [`YearMonth::try_new`] or [`YearMonth::from_str`].
    ///
    /// # Panics
    ///
    /// Panics when the year is outside `0..=9999` or the month is outside
    /// `1..=12`. In a const context this fails compilation instead.
    pub const fn new(year: i32, month: u32) -> Self {
        assert!(year >= 0 && year <= MAX_YEAR, "year out of range");
        assert!(month >= 1 && month <= 12, "month out of range");
        YearMonth { year, month }
    }

    pub fn try_new(year: i32, month: u32) -> Result<Self, YearMonthError> {
        if !(0..=MAX_YEAR).contains(&year) {
            return Err(YearMonthError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(YearMonthError::MonthOutOfRange(month));
        }
        Ok(YearMonth { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of this month.
    pub fn first_day(&self) -> NaiveDate {
        // parsed values are bounded to 0..=9999 and chrono covers every
        // year a NaiveDate can produce, so the fallback is unreachable
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Signed number of whole calendar months from `self` to `other`.
    pub fn months_until(&self, other: YearMonth) -> i64 {
        let years = i64::from(other.year) - i64::from(self.year);
        let months = i64::from(other.month) - i64::from(self.month);
        years * 12 + months
    }

    /// Short English rendering, e.g. `Jan 2023`.
    pub fn format_short(&self) -> String {
        self.first_day().format("%b %Y").to_string()
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || YearMonthError::InvalidFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        YearMonth::try_new(year, month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
