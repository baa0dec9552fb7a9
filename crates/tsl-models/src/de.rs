//! Lenient deserializers for the fields the service encodes inconsistently.
//!
//! Integer fields arrive either as JSON numbers or as numeric strings, and
//! absent nicknames / Steam IDs arrive as `null`, `""` or not at all.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

struct IntVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for IntVisitor<T>
where
  T: FromStr + TryFrom<i64> + TryFrom<u64>,
{
  type Value = T;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "an integer or a numeric string fitting {}", std::any::type_name::<T>())
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
    T::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
    T::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
    v.trim().parse().map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
  }
}

/// An integer given as a number or a numeric string
pub(crate) fn lenient_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: FromStr + TryFrom<i64> + TryFrom<u64>,
{
  deserializer.deserialize_any(IntVisitor(PhantomData))
}

/// Like [`lenient_int`], with `null`, `""` and `0` read as absent
pub(crate) fn lenient_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Raw {
    Number(u64),
    Text(String),
  }

  match Option::<Raw>::deserialize(deserializer)? {
    None | Some(Raw::Number(0)) => Ok(None),
    Some(Raw::Number(n)) => Ok(Some(n)),
    Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
    Some(Raw::Text(s)) => match s.trim().parse::<u64>() {
      Ok(0) => Ok(None),
      Ok(n) => Ok(Some(n)),
      Err(_) => Err(de::Error::invalid_value(de::Unexpected::Str(&s), &"a Steam ID")),
    },
  }
}

/// A string where `null` means empty
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Deserialize)]
  struct Sample {
    #[serde(deserialize_with = "lenient_int")]
    port: u16,
    #[serde(default, deserialize_with = "lenient_opt_u64")]
    steamid: Option<u64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    nickname: String,
  }

  #[test]
  fn test_numbers_and_strings() {
    let s: Sample = serde_json::from_str(r#"{"port": 7777, "steamid": 76561198000000001, "nickname": "Ruby"}"#).unwrap();
    assert_eq!(s.port, 7777);
    assert_eq!(s.steamid, Some(76561198000000001));
    assert_eq!(s.nickname, "Ruby");

    let s: Sample = serde_json::from_str(r#"{"port": "7778", "steamid": "76561198000000002"}"#).unwrap();
    assert_eq!(s.port, 7778);
    assert_eq!(s.steamid, Some(76561198000000002));
    assert_eq!(s.nickname, "");
  }

  #[test]
  fn test_absent_values() {
    for json in [
      r#"{"port": 1, "steamid": null, "nickname": null}"#,
      r#"{"port": 1, "steamid": ""}"#,
      r#"{"port": 1, "steamid": "0"}"#,
      r#"{"port": 1}"#,
    ] {
      let s: Sample = serde_json::from_str(json).unwrap();
      assert_eq!(s.steamid, None, "{}", json);
      assert_eq!(s.nickname, "");
    }
  }

  #[test]
  fn test_out_of_range_rejected() {
    assert!(serde_json::from_str::<Sample>(r#"{"port": 70000}"#).is_err());
    assert!(serde_json::from_str::<Sample>(r#"{"port": "-1"}"#).is_err());
    assert!(serde_json::from_str::<Sample>(r#"{"port": 1, "steamid": "abc"}"#).is_err());
  }
}
