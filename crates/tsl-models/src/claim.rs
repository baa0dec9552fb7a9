//! Daily vote claim status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a voter has voted today and whether the vote was claimed.
///
/// Decoded from the bare integer the claim endpoint returns. Codes other than
/// 0, 1 and 2 fall back to [`ClaimStatus::Unknown`] instead of failing; use
/// [`ClaimStatus::is_recognized_code`] to tell the fallback apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
  /// No vote today, or an unrecognised code
  Unknown,
  /// Voted, reward not yet claimed
  Unclaimed,
  /// Voted and claimed
  Claimed,
}

impl ClaimStatus {
  pub fn from_code(code: i64) -> Self {
    match code {
      1 => ClaimStatus::Unclaimed,
      2 => ClaimStatus::Claimed,
      _ => ClaimStatus::Unknown,
    }
  }

  pub fn is_recognized_code(code: i64) -> bool {
    (0..=2).contains(&code)
  }

  pub fn has_voted(&self) -> bool {
    !matches!(self, ClaimStatus::Unknown)
  }

  pub fn is_claimed(&self) -> bool {
    matches!(self, ClaimStatus::Claimed)
  }

  /// `None` if not voted, `Some(claimed)` otherwise
  pub fn as_option(&self) -> Option<bool> {
    match self {
      ClaimStatus::Unknown => None,
      ClaimStatus::Unclaimed => Some(false),
      ClaimStatus::Claimed => Some(true),
    }
  }
}

impl From<i64> for ClaimStatus {
  fn from(code: i64) -> Self {
    Self::from_code(code)
  }
}

impl fmt::Display for ClaimStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ClaimStatus::Unknown => write!(f, "not voted"),
      ClaimStatus::Unclaimed => write!(f, "voted, not claimed"),
      ClaimStatus::Claimed => write!(f, "voted and claimed"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_known_codes() {
    assert_eq!(ClaimStatus::from_code(0), ClaimStatus::Unknown);
    assert_eq!(ClaimStatus::from_code(1), ClaimStatus::Unclaimed);
    assert_eq!(ClaimStatus::from_code(2), ClaimStatus::Claimed);
  }

  #[test]
  fn test_unknown_codes_fall_back() {
    for code in [-1, 3, 42, i64::MAX] {
      assert_eq!(ClaimStatus::from(code), ClaimStatus::Unknown);
      assert!(!ClaimStatus::is_recognized_code(code));
    }
  }

  #[test]
  fn test_option_shape() {
    assert_eq!(ClaimStatus::Unknown.as_option(), None);
    assert_eq!(ClaimStatus::Unclaimed.as_option(), Some(false));
    assert_eq!(ClaimStatus::Claimed.as_option(), Some(true));
    assert!(ClaimStatus::Unclaimed.has_voted());
    assert!(!ClaimStatus::Unclaimed.is_claimed());
  }
}
