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

//! # tsl-core
//!
//! Shared pieces of the terraria-servers.com client: configuration, the error
//! type, the wire-level query vocabulary and the scalar decoders that turn the
//! API's loose encodings into typed values.

pub mod config;
pub mod decode;
pub mod error;

pub use config::Config;
pub use decode::MonthPeriod;
pub use error::{Error, Result};

/// The `object` query parameter of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
  Servers,
  Votes,
}

impl std::fmt::Display for ObjectType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ObjectType::Servers => write!(f, "servers"),
      ObjectType::Votes => write!(f, "votes"),
    }
  }
}

/// The `element` query parameter of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
  Detail,
  Votes,
  Voters,
  Claim,
}

impl std::fmt::Display for ElementType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ElementType::Detail => write!(f, "detail"),
      ElementType::Votes => write!(f, "votes"),
      ElementType::Voters => write!(f, "voters"),
      ElementType::Claim => write!(f, "claim"),
    }
  }
}

/// Base URL for the terraria-servers.com API
pub const TERRARIA_SERVERS_BASE_URL: &str = "https://terraria-servers.com/api/";

/// Default number of votes/voters requested
pub const DEFAULT_VOTE_LIMIT: u32 = 100;
/// Largest `limit` the service honours. Not enforced client side.
pub const MAX_VOTE_LIMIT: u32 = 500;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("tsl-client/", env!("CARGO_PKG_VERSION"));
