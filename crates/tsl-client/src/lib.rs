//! # tsl-client
//!
//! An async client for the terraria-servers.com server listing API.
//!
//! ## Features
//!
//! - **Typed responses**: server details, vote history and top voters as
//!   `tsl-models` records
//! - **Vote rewards**: check and claim a player's daily vote by nickname or
//!   Steam ID
//! - **Pluggable transport**: requests go through the [`Transport`] trait;
//!   [`ReqwestTransport`] is the default
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsl_client::{Config, TerrariaServerListClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TerrariaServerListClient::new(Config::from_env()?)?;
//!
//!     let voters = client.get_voters(Some(10)).await?;
//!     for voter in &voters {
//!         println!("{}", voter);
//!     }
//!
//!     if client.check_claimed_by_nickname("Ruby").await?.has_voted() {
//!         let claimed = client.claim_by_nickname("Ruby").await;
//!         println!("claimed: {}", claimed);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible methods return `Result<T, tsl_core::Error>`. Claim submission is
//! the exception: it reports every failure as `false`.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

#[cfg(test)]
mod test_utils;

// Re-export the main client and common types
pub use client::TerrariaServerListClient;
pub use tsl_core::{Config, Error, Result};
pub use tsl_models::*;

pub use endpoints::{servers::ServerEndpoints, votes::VoteEndpoints};
pub use transport::{ReqwestTransport, Transport};
