//! Booleans encoded as heterogeneous strings or digits.

use crate::error::{Error, Result};
use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Parse a truthy string.
///
/// Case-insensitive with surrounding whitespace ignored. `true`, `yes`, `y`
/// and `1` map to `true`; `false`, `no`, `n` and `0` map to `false`. Anything
/// else is an [`Error::InvalidFormat`], there is no fallback value.
pub fn parse_truthy(input: &str) -> Result<bool> {
  match input.trim().to_lowercase().as_str() {
    "true" | "yes" | "y" | "1" => Ok(true),
    "false" | "no" | "n" | "0" => Ok(false),
    _ => Err(Error::InvalidFormat(format!("{:?} is not a supported truthy value", input))),
  }
}

/// Serde entry point for `#[serde(deserialize_with = "...")]`.
///
/// Accepts JSON strings, booleans and integers; integers go through the same
/// table so only `0` and `1` are valid.
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
  D: Deserializer<'de>,
{
  deserializer.deserialize_any(TruthyVisitor)
}

struct TruthyVisitor;

impl<'de> Visitor<'de> for TruthyVisitor {
  type Value = bool;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a truthy string, boolean or 0/1")
  }

  fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<bool, E> {
    Ok(v)
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<bool, E> {
    parse_truthy(&v.to_string()).map_err(E::custom)
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<bool, E> {
    parse_truthy(&v.to_string()).map_err(E::custom)
  }

  fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<bool, E> {
    parse_truthy(v).map_err(E::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;

  #[derive(Deserialize)]
  struct Flag {
    #[serde(deserialize_with = "deserialize")]
    value: bool,
  }

  #[test]
  fn test_truthy_values() {
    for input in ["true", "YES", " y ", "1", "True", "yes\n"] {
      assert!(parse_truthy(input).unwrap(), "{:?}", input);
    }
  }

  #[test]
  fn test_falsy_values() {
    for input in ["No", "n", "0", "FALSE", "  false"] {
      assert!(!parse_truthy(input).unwrap(), "{:?}", input);
    }
  }

  #[test]
  fn test_unsupported_values_fail() {
    for input in ["", "2", "maybe", "on", "off", "t", "yess"] {
      assert!(matches!(parse_truthy(input), Err(Error::InvalidFormat(_))), "{:?}", input);
    }
  }

  #[test]
  fn test_deserialize_mixed_json() {
    let flag: Flag = serde_json::from_str(r#"{"value": "Yes"}"#).unwrap();
    assert!(flag.value);
    let flag: Flag = serde_json::from_str(r#"{"value": 0}"#).unwrap();
    assert!(!flag.value);
    let flag: Flag = serde_json::from_str(r#"{"value": true}"#).unwrap();
    assert!(flag.value);

    assert!(serde_json::from_str::<Flag>(r#"{"value": "sometimes"}"#).is_err());
    assert!(serde_json::from_str::<Flag>(r#"{"value": 7}"#).is_err());
  }
}
