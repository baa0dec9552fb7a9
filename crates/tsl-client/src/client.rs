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

//! The client facade

use crate::endpoints::{EndpointCore, UrlBuilder, servers::ServerEndpoints, votes::VoteEndpoints};
use crate::transport::{ReqwestTransport, Transport};
use std::sync::Arc;
use tsl_core::{Config, Result};
use tsl_models::{ClaimStatus, Server, VoteList, VoterId, VoterList};

/// Main terraria-servers.com API client
///
/// Holds the API key and a transport. The transport is an explicit,
/// reference-counted dependency: [`TerrariaServerListClient::new`] creates a
/// private one, [`TerrariaServerListClient::with_transport`] shares one the
/// caller already owns. Dropping a client only releases its own reference, so
/// other clients on the same transport keep working.
///
/// # Examples
///
/// ```ignore
/// use tsl_client::TerrariaServerListClient;
/// use tsl_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TerrariaServerListClient::new(Config::from_env()?)?;
///
///     let server = client.get_server().await?;
///     println!("{} is ranked #{}", server.name(), server.rank());
///
///     let votes = client.get_votes(Some(50)).await?;
///     println!("{} votes in {}", votes.len(), votes.period());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct TerrariaServerListClient {
  core: EndpointCore,
}

impl TerrariaServerListClient {
  /// Create a new client with its own HTTP transport
  ///
  /// # Errors
  ///
  /// [`tsl_core::Error::InvalidArgument`] if the API key is empty or whitespace,
  /// [`tsl_core::Error::Config`] for a bad base URL, [`tsl_core::Error::Http`] if the HTTP client
  /// cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    config.validate()?;
    let transport = Arc::new(ReqwestTransport::new(&config)?);
    Self::with_transport(config, transport)
  }

  /// Create a client on an existing transport
  ///
  /// Use this to share one connection pool between several clients, or to
  /// plug in a different [`Transport`].
  pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
    let urls = Arc::new(UrlBuilder::new(&config)?);
    Ok(Self { core: EndpointCore::new(transport, urls) })
  }

  /// Create a client from `TSL_*` environment variables
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// The transport this client sends requests through
  pub fn transport(&self) -> &Arc<dyn Transport> {
    &self.core.transport
  }

  /// Get access to server endpoints (`object=servers`)
  pub fn servers(&self) -> ServerEndpoints {
    ServerEndpoints::new(self.core.clone())
  }

  /// Get access to vote endpoints (`object=votes`)
  pub fn votes(&self) -> VoteEndpoints {
    VoteEndpoints::new(self.core.clone())
  }

  /// Fetch the server's listing
  pub async fn get_server(&self) -> Result<Server> {
    self.servers().detail().await
  }

  /// Fetch up to `amount` votes, default 100, service maximum 500
  pub async fn get_votes(&self, amount: Option<u32>) -> Result<VoteList> {
    self.servers().votes(amount).await
  }

  /// Fetch up to `amount` top voters, default 100, service maximum 500
  pub async fn get_voters(&self, amount: Option<u32>) -> Result<VoterList> {
    self.servers().voters(amount).await
  }

  /// Claim status of today's vote by nickname
  ///
  /// An empty nickname fails with [`tsl_core::Error::InvalidArgument`] without a request.
  pub async fn check_claimed_by_nickname(&self, nickname: &str) -> Result<ClaimStatus> {
    self.votes().check_claim(&VoterId::Nickname(nickname.to_string())).await
  }

  /// Claim status of today's vote by Steam ID
  pub async fn check_claimed_by_steam_id(&self, steam_id: u64) -> Result<ClaimStatus> {
    self.votes().check_claim(&VoterId::SteamId(steam_id)).await
  }

  /// Claim today's vote for a nickname; true only if the service confirmed it
  pub async fn claim_by_nickname(&self, nickname: &str) -> bool {
    self.votes().claim(&VoterId::Nickname(nickname.to_string())).await
  }

  /// Claim today's vote for a Steam ID; true only if the service confirmed it
  pub async fn claim_by_steam_id(&self, steam_id: u64) -> bool {
    self.votes().claim(&VoterId::SteamId(steam_id)).await
  }
}

impl std::fmt::Debug for TerrariaServerListClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TerrariaServerListClient")
      .field("transport", &self.core.transport)
      .field("urls", &self.core.urls)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::StubTransport;
  use tsl_core::Error;

  #[test]
  fn test_client_creation() {
    let client = TerrariaServerListClient::new(Config::default_with_key("test_key")).expect("Failed to create client");
    assert!(!format!("{:?}", client).contains("test_key"));
  }

  #[test]
  fn test_blank_key_rejected() {
    for key in ["", "  "] {
      let result = TerrariaServerListClient::new(Config::default_with_key(key));
      assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
  }

  #[tokio::test]
  async fn test_empty_nickname_rejected_without_request() {
    let stub = Arc::new(StubTransport::new());
    let client = TerrariaServerListClient::with_transport(Config::default_with_key("k"), stub.clone()).unwrap();

    let result = client.check_claimed_by_nickname("").await;
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert!(stub.calls().is_empty());
  }

  #[tokio::test]
  async fn test_shared_transport_survives_drop() {
    let stub = Arc::new(StubTransport::new().respond("1").respond("2"));
    let first = TerrariaServerListClient::with_transport(Config::default_with_key("a"), stub.clone()).unwrap();
    let second = TerrariaServerListClient::with_transport(Config::default_with_key("b"), stub.clone()).unwrap();
    assert_eq!(Arc::strong_count(&stub), 3);

    assert_eq!(first.check_claimed_by_steam_id(1).await.unwrap(), ClaimStatus::Unclaimed);
    drop(first);
    assert_eq!(Arc::strong_count(&stub), 2);

    assert_eq!(second.check_claimed_by_steam_id(1).await.unwrap(), ClaimStatus::Claimed);
    assert_eq!(stub.calls().len(), 2);
  }
}
