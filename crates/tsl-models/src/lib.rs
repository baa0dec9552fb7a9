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

//! # tsl-models
//!
//! Data models for terraria-servers.com API responses.
//!
//! Every record is an immutable snapshot built by deserializing one response.
//! The service's loose encodings (truthy strings, legacy dates, epoch seconds,
//! `yyyyMM` months, numbers sent as strings) are normalised during
//! deserialization by the decoders in `tsl_core::decode`.
//!
//! ## Usage
//!
//! ```ignore
//! use tsl_models::{Server, VoteList};
//!
//! let server: Server = serde_json::from_str(&detail_json)?;
//! let votes: VoteList = serde_json::from_str(&votes_json)?;
//! println!("{} has {} votes this month", server.name(), votes.len());
//! ```

#![warn(clippy::all)]

mod de;

pub mod claim;
pub mod identity;
pub mod server;
pub mod slots;
pub mod version;
pub mod voters;
pub mod votes;

pub use claim::ClaimStatus;
pub use identity::VoterId;
pub use server::Server;
pub use slots::Slots;
pub use tsl_core::MonthPeriod;
pub use version::ServerVersion;
pub use voters::{Voter, VoterList};
pub use votes::{Vote, VoteList};
