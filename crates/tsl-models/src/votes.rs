//! Vote history for a server

use crate::de::{lenient_int, lenient_opt_u64, null_as_empty};
use crate::identity::VoterId;
use crate::slots::Slots;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tsl_core::MonthPeriod;
use tsl_core::decode::{epoch, truthy};

/// One recorded vote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
  /// When the vote was cast; epoch seconds on the wire
  #[serde(with = "epoch")]
  timestamp: DateTime<Utc>,

  /// Empty when the voter used a Steam ID instead
  #[serde(default, deserialize_with = "null_as_empty")]
  nickname: String,

  #[serde(default, deserialize_with = "lenient_opt_u64")]
  steamid: Option<u64>,

  #[serde(deserialize_with = "truthy::deserialize")]
  claimed: bool,
}

impl Vote {
  pub fn timestamp(&self) -> DateTime<Utc> {
    self.timestamp
  }

  pub fn nickname(&self) -> &str {
    &self.nickname
  }

  /// Steam ID of the voter, if any.
  ///
  /// `null`, `""` and `0` all decode as `None`. Zero is not a valid Steam ID,
  /// so it is read as "not given" rather than kept as `Some(0)`.
  pub fn steam_id(&self) -> Option<u64> {
    self.steamid
  }

  /// True once the reward for this vote has been handed out
  pub fn is_claimed(&self) -> bool {
    self.claimed
  }

  /// The nickname if one was given, otherwise the Steam ID
  pub fn voter(&self) -> Option<VoterId> {
    if !self.nickname.is_empty() {
      Some(VoterId::Nickname(self.nickname.clone()))
    } else {
      self.steamid.map(VoterId::SteamId)
    }
  }
}

/// Votes for a server in one reporting month, from `element=votes`.
///
/// The service pads the `votes` array with `null` when fewer votes exist than
/// were requested; [`VoteList::len`] reports the real votes only while
/// [`VoteList::get`] and indexing keep the original positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteList {
  #[serde(default, deserialize_with = "null_as_empty")]
  name: String,

  #[serde(default, deserialize_with = "null_as_empty")]
  address: String,

  #[serde(deserialize_with = "lenient_int")]
  port: u16,

  month: MonthPeriod,

  #[serde(default)]
  votes: Slots<Vote>,
}

impl VoteList {
  /// Server name
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn address(&self) -> &str {
    &self.address
  }

  pub fn port(&self) -> u16 {
    self.port
  }

  /// Reporting month the votes belong to
  pub fn period(&self) -> MonthPeriod {
    self.month
  }

  /// Number of votes present, `null` slots excluded
  pub fn len(&self) -> usize {
    self.votes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.votes.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&Vote> {
    self.votes.get(index)
  }

  pub fn slots(&self) -> &Slots<Vote> {
    &self.votes
  }

  pub fn iter(&self) -> impl Iterator<Item = &Vote> + '_ {
    self.votes.iter()
  }

  /// Votes whose reward has not been claimed yet
  pub fn unclaimed(&self) -> impl Iterator<Item = &Vote> + '_ {
    self.iter().filter(|vote| !vote.is_claimed())
  }
}

impl Index<usize> for VoteList {
  type Output = Option<Vote>;

  fn index(&self, index: usize) -> &Self::Output {
    &self.votes[index]
  }
}

impl<'a> IntoIterator for &'a VoteList {
  type Item = &'a Vote;
  type IntoIter = <&'a Slots<Vote> as IntoIterator>::IntoIter;

  fn into_iter(self) -> Self::IntoIter {
    (&self.votes).into_iter()
  }
}
