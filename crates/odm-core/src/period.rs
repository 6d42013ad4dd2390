//! # Monthly Periods
//!
//! Defines [`Month`], the single temporal primitive of the workspace. The
//! simulated series is monthly, so nothing in the core needs finer
//! granularity than (year, month).
//!
//! ## Invariant
//!
//! A `Month` is valid by construction (month ∈ 1..=12) and totally ordered
//! chronologically, so time-series ordering never depends on string
//! comparison or a datetime library's timezone semantics.
//!
//! ## Rendering
//!
//! The canonical rendering is `YYYY-MM` (e.g. `2022-01`), which is also the
//! serde representation and the accepted parse format.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::OdmError;

/// A calendar month in the proleptic Gregorian calendar, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, validating `month ∈ 1..=12`.
    ///
    /// # Errors
    ///
    /// Returns [`OdmError::InvalidInput`] for an out-of-range month number.
    pub fn new(year: i32, month: u32) -> Result<Self, OdmError> {
        if !(1..=12).contains(&month) {
            return Err(OdmError::InvalidInput(format!(
                "month must be in 1..=12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    /// January of `year`. Always valid, usable in const contexts.
    pub const fn start_of(year: i32) -> Self {
        Self { year, month: 1 }
    }

    /// The current month in UTC.
    pub fn current() -> Self {
        let now = Utc::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    /// Parse from the canonical `YYYY-MM` rendering.
    ///
    /// # Errors
    ///
    /// Returns [`OdmError::InvalidInput`] if the string is not of the form
    /// `YYYY-MM` or the month number is out of range.
    pub fn parse(s: &str) -> Result<Self, OdmError> {
        let malformed = || OdmError::InvalidInput(format!("expected YYYY-MM, got: {s:?}"));
        let (y, m) = s.split_once('-').ok_or_else(malformed)?;
        if y.len() != 4 || m.len() != 2 {
            return Err(malformed());
        }
        let year: i32 = y.parse().map_err(|_| malformed())?;
        let month: u32 = m.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1..=12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month immediately after this one.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Every month from `from` through `to`, inclusive, in chronological
    /// order. Empty when `from > to`.
    pub fn sequence(from: Month, to: Month) -> Vec<Month> {
        let mut months = Vec::new();
        let mut cursor = from;
        while cursor <= to {
            months.push(cursor);
            cursor = cursor.next();
        }
        months
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_range() {
        assert!(Month::new(2022, 1).is_ok());
        assert!(Month::new(2022, 12).is_ok());
        assert!(Month::new(2022, 0).is_err());
        assert!(Month::new(2022, 13).is_err());
    }

    #[test]
    fn display_zero_pads() {
        let m = Month::new(2022, 3).unwrap();
        assert_eq!(m.to_string(), "2022-03");
    }

    #[test]
    fn parse_roundtrip() {
        let m = Month::parse("2024-11").unwrap();
        assert_eq!(m.year(), 2024);
        assert_eq!(m.month(), 11);
        assert_eq!(Month::parse(&m.to_string()).unwrap(), m);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(Month::parse("2024").is_err());
        assert!(Month::parse("2024-13").is_err());
        assert!(Month::parse("24-01").is_err());
        assert!(Month::parse("2024-1").is_err());
        assert!(Month::parse("not-a-month").is_err());
    }

    #[test]
    fn next_rolls_over_year() {
        let dec = Month::new(2022, 12).unwrap();
        assert_eq!(dec.next(), Month::new(2023, 1).unwrap());
    }

    #[test]
    fn ordering_is_chronological() {
        let a = Month::new(2022, 12).unwrap();
        let b = Month::new(2023, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn sequence_inclusive() {
        let from = Month::new(2022, 11).unwrap();
        let to = Month::new(2023, 2).unwrap();
        let months = Month::sequence(from, to);
        assert_eq!(
            months.iter().map(Month::to_string).collect::<Vec<_>>(),
            ["2022-11", "2022-12", "2023-01", "2023-02"]
        );
    }

    #[test]
    fn sequence_single_month() {
        let m = Month::new(2022, 1).unwrap();
        assert_eq!(Month::sequence(m, m), vec![m]);
    }

    #[test]
    fn sequence_empty_when_inverted() {
        let from = Month::new(2023, 1).unwrap();
        let to = Month::new(2022, 1).unwrap();
        assert!(Month::sequence(from, to).is_empty());
    }

    #[test]
    fn serde_uses_canonical_string() {
        let m = Month::new(2022, 7).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"2022-07\"");
        let back: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
