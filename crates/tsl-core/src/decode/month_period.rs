//! Reporting months encoded as `yyyyMM`.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// A calendar month that scopes vote and voter listings.
///
/// Parsed strictly from six ASCII digits; `"202403"` is March 2024 while
/// `"2024-03"` or `"24III"` are rejected. Serializes back to `yyyyMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthPeriod {
  first_day: NaiveDate,
}

impl MonthPeriod {
  /// Build a period from a year and a 1-based month
  pub fn new(year: i32, month: u32) -> Result<Self> {
    NaiveDate::from_ymd_opt(year, month, 1)
      .map(|first_day| Self { first_day })
      .ok_or_else(|| Error::InvalidFormat(format!("{}-{} is not a calendar month", year, month)))
  }

  /// Parse a `yyyyMM` string
  pub fn parse(input: &str) -> Result<Self> {
    let invalid = || Error::InvalidFormat(format!("{:?} is not a yyyyMM month", input));
    if input.len() != 6 || !input.bytes().all(|b| b.is_ascii_digit()) {
      return Err(invalid());
    }
    let year: i32 = input[..4].parse().map_err(|_| invalid())?;
    let month: u32 = input[4..].parse().map_err(|_| invalid())?;
    Self::new(year, month).map_err(|_| invalid())
  }

  /// First day of the month
  pub fn first_day(&self) -> NaiveDate {
    self.first_day
  }

  pub fn year(&self) -> i32 {
    self.first_day.year()
  }

  pub fn month(&self) -> u32 {
    self.first_day.month()
  }

  /// Whether `date` falls inside this month
  pub fn contains(&self, date: NaiveDate) -> bool {
    date.year() == self.year() && date.month() == self.month()
  }
}

impl FromStr for MonthPeriod {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::parse(s)
  }
}

impl fmt::Display for MonthPeriod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:04}{:02}", self.year(), self.month())
  }
}

impl From<MonthPeriod> for NaiveDate {
  fn from(period: MonthPeriod) -> Self {
    period.first_day
  }
}

impl Serialize for MonthPeriod {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for MonthPeriod {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Self::parse(&raw).map_err(de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_valid_month() {
    let period = MonthPeriod::parse("202403").unwrap();
    assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(period.year(), 2024);
    assert_eq!(period.month(), 3);
    assert_eq!(period.to_string(), "202403");
  }

  #[test]
  fn test_parse_rejects_other_layouts() {
    for input in ["2024-03", "24III", "2024031", "20243", "202400", "202413", "", " 202403", "+20243"] {
      assert!(matches!(MonthPeriod::parse(input), Err(Error::InvalidFormat(_))), "{:?}", input);
    }
  }

  #[test]
  fn test_contains() {
    let period: MonthPeriod = "201712".parse().unwrap();
    assert!(period.contains(NaiveDate::from_ymd_opt(2017, 12, 31).unwrap()));
    assert!(!period.contains(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap()));
  }

  #[test]
  fn test_ordering_follows_calendar() {
    let earlier = MonthPeriod::new(2023, 12).unwrap();
    let later = MonthPeriod::new(2024, 1).unwrap();
    assert!(earlier < later);
  }

  #[test]
  fn test_serde_uses_compact_form() {
    let period: MonthPeriod = serde_json::from_str(r#""201801""#).unwrap();
    assert_eq!(period, MonthPeriod::new(2018, 1).unwrap());
    assert_eq!(serde_json::to_string(&period).unwrap(), r#""201801""#);
    assert!(serde_json::from_str::<MonthPeriod>(r#""2018-01""#).is_err());
  }
}
