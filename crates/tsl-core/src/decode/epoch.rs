//! Unix epoch timestamps carried as JSON numbers.
//!
//! Use as `#[serde(with = "tsl_core::decode::epoch")]`. Values are read from
//! integers, floats or numeric strings and always written back as a bare JSON
//! number.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

fn from_parts(whole: f64, fraction: f64, input: f64) -> Result<DateTime<Utc>> {
  let out_of_range = || Error::InvalidFormat(format!("epoch value {} is out of range", input));
  if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
    return Err(out_of_range());
  }
  let mut secs = whole as i64;
  let mut nanos = (fraction * NANOS_PER_SEC).round() as u32;
  if nanos >= 1_000_000_000 {
    secs = secs.checked_add(1).ok_or_else(out_of_range)?;
    nanos = 0;
  }
  DateTime::from_timestamp(secs, nanos).ok_or_else(out_of_range)
}

/// Seconds since 1970-01-01T00:00:00Z to a timestamp.
///
/// Fractional seconds are kept to the precision an `f64` carries.
pub fn from_epoch_seconds(secs: f64) -> Result<DateTime<Utc>> {
  if !secs.is_finite() {
    return Err(Error::InvalidFormat(format!("epoch value {} is not finite", secs)));
  }
  let whole = secs.floor();
  from_parts(whole, secs - whole, secs)
}

/// A timestamp to seconds since the epoch.
pub fn to_epoch_seconds(time: &DateTime<Utc>) -> f64 {
  time.timestamp() as f64 + f64::from(time.timestamp_subsec_nanos()) / NANOS_PER_SEC
}

/// Milliseconds since the epoch to a timestamp.
pub fn from_epoch_millis(millis: f64) -> Result<DateTime<Utc>> {
  if !millis.is_finite() {
    return Err(Error::InvalidFormat(format!("epoch value {} is not finite", millis)));
  }
  let whole_secs = (millis / 1000.0).floor();
  let remainder_ms = millis - whole_secs * 1000.0;
  from_parts(whole_secs, remainder_ms / 1000.0, millis)
}

/// A timestamp to milliseconds since the epoch.
pub fn to_epoch_millis(time: &DateTime<Utc>) -> f64 {
  time.timestamp() as f64 * 1000.0 + f64::from(time.timestamp_subsec_nanos()) / 1_000_000.0
}

/// Write the timestamp as a raw number of seconds.
///
/// Whole seconds are written as an integer literal, anything finer as a float.
pub fn serialize<S>(time: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
  S: Serializer,
{
  if time.timestamp_subsec_nanos() == 0 {
    serializer.serialize_i64(time.timestamp())
  } else {
    serializer.serialize_f64(to_epoch_seconds(time))
  }
}

pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
  D: Deserializer<'de>,
{
  deserializer.deserialize_any(EpochVisitor)
}

struct EpochVisitor;

impl<'de> Visitor<'de> for EpochVisitor {
  type Value = DateTime<Utc>;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("seconds since the Unix epoch")
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
    DateTime::from_timestamp(v, 0)
      .ok_or_else(|| E::custom(format!("epoch value {} is out of range", v)))
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
    let secs = i64::try_from(v).map_err(|_| E::custom(format!("epoch value {} is out of range", v)))?;
    self.visit_i64(secs)
  }

  fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
    from_epoch_seconds(v).map_err(E::custom)
  }

  fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
    let trimmed = v.trim();
    if let Ok(secs) = trimmed.parse::<i64>() {
      return self.visit_i64(secs);
    }
    let secs: f64 = trimmed
      .parse()
      .map_err(|_| E::custom(format!("{:?} is not an epoch timestamp", v)))?;
    self.visit_f64(secs)
  }
}
