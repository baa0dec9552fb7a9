//! Top voters for a server

use crate::de::{lenient_int, null_as_empty};
use crate::slots::Slots;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use tsl_core::MonthPeriod;

/// A voter and their vote count for the month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
  #[serde(default, deserialize_with = "null_as_empty")]
  nickname: String,

  #[serde(deserialize_with = "lenient_int")]
  votes: u32,
}

impl Voter {
  pub fn nickname(&self) -> &str {
    &self.nickname
  }

  /// Votes cast in the reporting month
  pub fn votes(&self) -> u32 {
    self.votes
  }
}

impl fmt::Display for Voter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.nickname, self.votes)
  }
}

/// Voter ranking for one reporting month, from `element=voters`.
///
/// Same `null` padding rules as [`crate::VoteList`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoterList {
  #[serde(default, deserialize_with = "null_as_empty")]
  name: String,

  #[serde(default, deserialize_with = "null_as_empty")]
  address: String,

  #[serde(deserialize_with = "lenient_int")]
  port: u16,

  month: MonthPeriod,

  #[serde(default)]
  voters: Slots<Voter>,
}

impl VoterList {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn address(&self) -> &str {
    &self.address
  }

  pub fn port(&self) -> u16 {
    self.port
  }

  pub fn period(&self) -> MonthPeriod {
    self.month
  }

  /// Number of voters present, `null` slots excluded
  pub fn len(&self) -> usize {
    self.voters.len()
  }

  pub fn is_empty(&self) -> bool {
    self.voters.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&Voter> {
    self.voters.get(index)
  }

  pub fn slots(&self) -> &Slots<Voter> {
    &self.voters
  }

  pub fn iter(&self) -> impl Iterator<Item = &Voter> + '_ {
    self.voters.iter()
  }

  /// Sum of all listed voters' votes
  pub fn total_votes(&self) -> u64 {
    self.iter().map(|voter| u64::from(voter.votes)).sum()
  }
}

impl Index<usize> for VoterList {
  type Output = Option<Voter>;

  fn index(&self, index: usize) -> &Self::Output {
    &self.voters[index]
  }
}

impl<'a> IntoIterator for &'a VoterList {
  type Item = &'a Voter;
  type IntoIter = <&'a Slots<Voter> as IntoIterator>::IntoIter;

  fn into_iter(self) -> Self::IntoIter {
    (&self.voters).into_iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const VOTERS_JSON: &str = r#"{
    "name": "Journey's End Survival",
    "address": "play.example.net",
    "port": 7777,
    "month": "201712",
    "voters": [
      {"nickname": "Ruby", "votes": "31"},
      {"nickname": "Sapphire", "votes": 12},
      null
    ]
  }"#;

  #[test]
  fn test_deserialize_voters() {
    let list: VoterList = serde_json::from_str(VOTERS_JSON).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.slots().slot_count(), 3);
    assert_eq!(list.period().to_string(), "201712");
    assert_eq!(list.get(0).unwrap().votes(), 31);
    assert!(list[2].is_none());
    assert_eq!(list.total_votes(), 43);
  }

  #[test]
  fn test_voter_display() {
    let list: VoterList = serde_json::from_str(VOTERS_JSON).unwrap();
    let lines: Vec<String> = list.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["Ruby: 31", "Sapphire: 12"]);
  }

  #[test]
  fn test_null_header_text() {
    let list: VoterList =
      serde_json::from_str(r#"{"name": "x", "address": null, "port": 1, "month": "201712", "voters": []}"#)
        .unwrap();
    assert_eq!(list.name(), "x");
    assert_eq!(list.address(), "");
    assert!(list.is_empty());
  }
}
