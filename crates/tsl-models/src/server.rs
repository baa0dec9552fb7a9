/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Server detail snapshot

use crate::de::{lenient_int, null_as_empty};
use crate::version::ServerVersion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tsl_core::decode::{legacy_date, truthy};

/// A server's listing as returned by `object=servers&element=detail`.
///
/// Read-only snapshot: fields are only reachable through accessors. The two
/// timestamps are decoded from the legacy text format and are serialized as
/// RFC 3339; the legacy format is never written. `last_online <= last_check`
/// usually holds but is not checked, since the service does not guarantee it.
/// Free-text fields that arrive as `null` or are missing read as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
  #[serde(deserialize_with = "lenient_int")]
  id: u64,

  #[serde(default, deserialize_with = "null_as_empty")]
  name: String,

  #[serde(default, deserialize_with = "null_as_empty")]
  address: String,

  #[serde(deserialize_with = "lenient_int")]
  port: u16,

  #[serde(deserialize_with = "truthy::deserialize")]
  private: bool,

  #[serde(rename(deserialize = "password"), deserialize_with = "truthy::deserialize")]
  password_protected: bool,

  #[serde(default, deserialize_with = "null_as_empty")]
  location: String,

  #[serde(default, deserialize_with = "null_as_empty")]
  hostname: String,

  #[serde(default, deserialize_with = "null_as_empty")]
  map: String,

  #[serde(rename(deserialize = "is_online"), deserialize_with = "truthy::deserialize")]
  online: bool,

  #[serde(deserialize_with = "lenient_int")]
  players: u32,

  #[serde(rename(deserialize = "maxplayers"), alias = "maxPlayers", deserialize_with = "lenient_int")]
  max_players: u32,

  version: ServerVersion,

  #[serde(default, deserialize_with = "null_as_empty")]
  platform: String,

  #[serde(deserialize_with = "lenient_int")]
  uptime: u32,

  #[serde(deserialize_with = "lenient_int")]
  score: i64,

  #[serde(deserialize_with = "lenient_int")]
  rank: u32,

  #[serde(deserialize_with = "lenient_int")]
  votes: u32,

  #[serde(deserialize_with = "lenient_int")]
  favorited: u32,

  #[serde(deserialize_with = "lenient_int")]
  comments: u32,

  #[serde(default, deserialize_with = "null_as_empty")]
  url: String,

  #[serde(deserialize_with = "legacy_date::deserialize")]
  last_check: DateTime<Utc>,

  #[serde(deserialize_with = "legacy_date::deserialize")]
  last_online: DateTime<Utc>,
}

impl Server {
  /// Server ID, the part of the listing URL after `/server/`
  pub fn id(&self) -> u64 {
    self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// IP or domain name players connect to
  pub fn address(&self) -> &str {
    &self.address
  }

  pub fn port(&self) -> u16 {
    self.port
  }

  /// `address:port`
  pub fn endpoint(&self) -> String {
    format!("{}:{}", self.address, self.port)
  }

  /// True if the server is unlisted
  pub fn is_private(&self) -> bool {
    self.private
  }

  /// True if joining needs a password
  pub fn is_password_protected(&self) -> bool {
    self.password_protected
  }

  /// Geographical location
  pub fn location(&self) -> &str {
    &self.location
  }

  /// Name of the hosting provider
  pub fn hostname(&self) -> &str {
    &self.hostname
  }

  /// Currently loaded world
  pub fn map(&self) -> &str {
    &self.map
  }

  /// True if the last status check reached the server
  pub fn is_online(&self) -> bool {
    self.online
  }

  pub fn players(&self) -> u32 {
    self.players
  }

  pub fn max_players(&self) -> u32 {
    self.max_players
  }

  pub fn version(&self) -> ServerVersion {
    self.version
  }

  /// Operating system the server runs on
  pub fn platform(&self) -> &str {
    &self.platform
  }

  /// Uptime percentage, 0-100
  pub fn uptime(&self) -> u32 {
    self.uptime
  }

  pub fn score(&self) -> i64 {
    self.score
  }

  /// Position on the list, 1 is best
  pub fn rank(&self) -> u32 {
    self.rank
  }

  /// Votes in the current month
  pub fn votes(&self) -> u32 {
    self.votes
  }

  /// Favorites, all time
  pub fn favorited(&self) -> u32 {
    self.favorited
  }

  pub fn comments(&self) -> u32 {
    self.comments
  }

  /// Listing page on terraria-servers.com
  pub fn url(&self) -> &str {
    &self.url
  }

  /// When the listing last checked the server's status
  pub fn last_check(&self) -> DateTime<Utc> {
    self.last_check
  }

  /// When the server was last seen online
  pub fn last_online(&self) -> DateTime<Utc> {
    self.last_online
  }
}
