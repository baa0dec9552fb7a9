//! Ways the service identifies a voter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A voter is known either by the nickname they typed or by their Steam ID.
///
/// The API takes exactly one of `username` / `steamid`; [`VoterId::query_pair`]
/// yields the matching parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoterId {
  Nickname(String),
  SteamId(u64),
}

impl VoterId {
  /// Query parameter name and value for this identity
  pub fn query_pair(&self) -> (&'static str, String) {
    match self {
      VoterId::Nickname(nickname) => ("username", nickname.clone()),
      VoterId::SteamId(id) => ("steamid", id.to_string()),
    }
  }
}

impl fmt::Display for VoterId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      VoterId::Nickname(nickname) => write!(f, "{}", nickname),
      VoterId::SteamId(id) => write!(f, "steam:{}", id),
    }
  }
}

impl From<u64> for VoterId {
  fn from(id: u64) -> Self {
    VoterId::SteamId(id)
  }
}

impl From<&str> for VoterId {
  fn from(nickname: &str) -> Self {
    VoterId::Nickname(nickname.to_string())
  }
}

impl From<String> for VoterId {
  fn from(nickname: String) -> Self {
    VoterId::Nickname(nickname)
  }
}
