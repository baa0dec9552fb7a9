//! The free-text timestamps used by the server detail endpoint.
//!
//! The service renders `last_check` / `last_online` as English text such as
//! `"Sunday, March 4th, 2018 11:20 PM EST"`. Day-first text
//! (`4th March 2018`), ISO (`2018-03-04 23:20:00`) and numeric US dates
//! (`3/4/2018 11:20:00 PM`) are accepted too. The zone is always US Eastern
//! standard time, so the decoder shifts by a fixed five hours instead of doing
//! zone arithmetic. Only the read direction exists; nothing in this crate can
//! write the format back.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer, de};
use std::sync::OnceLock;

/// Zone abbreviation the service appends to every timestamp
pub const SOURCE_TIMEZONE: &str = "EST";

/// Hours added to move a source timestamp onto UTC
pub const SOURCE_OFFSET_HOURS: i64 = 5;

// Month-first English text, then day-first text, ISO and numeric US dates
const DATE_TIME_FORMATS: &[&str] = &[
  "%B %d %Y %I:%M:%S %p",
  "%B %d %Y %I:%M %p",
  "%B %d %Y %H:%M:%S",
  "%B %d %Y %H:%M",
  "%A %B %d %Y %I:%M:%S %p",
  "%A %B %d %Y %I:%M %p",
  "%A %B %d %Y %H:%M:%S",
  "%A %B %d %Y %H:%M",
  "%d %B %Y %I:%M:%S %p",
  "%d %B %Y %I:%M %p",
  "%d %B %Y %H:%M:%S",
  "%d %B %Y %H:%M",
  "%A %d %B %Y %I:%M:%S %p",
  "%A %d %B %Y %I:%M %p",
  "%A %d %B %Y %H:%M:%S",
  "%A %d %B %Y %H:%M",
  "%Y-%m-%d %H:%M:%S",
  "%Y-%m-%d %H:%M",
  "%Y-%m-%dT%H:%M:%S",
  "%m/%d/%Y %I:%M:%S %p",
  "%m/%d/%Y %I:%M %p",
  "%m/%d/%Y %H:%M:%S",
  "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%B %d %Y", "%A %B %d %Y", "%d %B %Y", "%A %d %B %Y", "%Y-%m-%d", "%m/%d/%Y"];

fn timezone_token() -> Option<&'static Regex> {
  static RE: OnceLock<Option<Regex>> = OnceLock::new();
  RE.get_or_init(|| Regex::new(&format!(r"\b{}\b", SOURCE_TIMEZONE)).ok()).as_ref()
}

fn ordinal_suffix() -> Option<&'static Regex> {
  static RE: OnceLock<Option<Regex>> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"(?i)\b(\d{1,2})(st|nd|rd|th)\b").ok()).as_ref()
}

/// Strip the zone token, commas and day ordinals, then collapse whitespace.
fn clean(input: &str) -> String {
  let mut text = input.to_string();
  if let Some(re) = timezone_token() {
    text = re.replace_all(&text, " ").into_owned();
  }
  if let Some(re) = ordinal_suffix() {
    text = re.replace_all(&text, "$1").into_owned();
  }
  text.replace(',', " ").split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_naive(cleaned: &str) -> Option<NaiveDateTime> {
  DATE_TIME_FORMATS
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(cleaned, fmt).ok())
    .or_else(|| {
      DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cleaned, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

/// Parse a legacy timestamp and shift it from the source zone onto UTC.
pub fn parse_legacy_date(input: &str) -> Result<DateTime<Utc>> {
  let cleaned = clean(input);
  let naive = parse_naive(&cleaned)
    .ok_or_else(|| Error::InvalidFormat(format!("unrecognised date {:?}", input)))?;

  naive
    .checked_add_signed(TimeDelta::hours(SOURCE_OFFSET_HOURS))
    .map(|shifted| shifted.and_utc())
    .ok_or_else(|| Error::InvalidFormat(format!("date {:?} is out of range", input)))
}

/// Serde entry point for `#[serde(deserialize_with = "...")]`.
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = String::deserialize(deserializer)?;
  parse_legacy_date(&raw).map_err(de::Error::custom)
}
