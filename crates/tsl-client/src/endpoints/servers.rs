//! Server endpoints (`object=servers`)
//!
//! - `element=detail`: the server's listing
//! - `element=votes`: vote history for the current month
//! - `element=voters`: top voters for the current month

use super::EndpointCore;
use crate::transport::get_json;
use tracing::{debug, instrument};
use tsl_core::{DEFAULT_VOTE_LIMIT, ElementType, MAX_VOTE_LIMIT, ObjectType, Result};
use tsl_models::{Server, VoteList, VoterList};

/// Server detail and vote listing endpoints
#[derive(Debug, Clone)]
pub struct ServerEndpoints {
  core: EndpointCore,
}

impl ServerEndpoints {
  /// Create a new server endpoints instance
  pub fn new(core: EndpointCore) -> Self {
    Self { core }
  }

  /// Get the listing of the server the API key belongs to
  #[instrument(skip(self))]
  pub async fn detail(&self) -> Result<Server> {
    let url = self.core.urls.build(ObjectType::Servers, ElementType::Detail, &[]);
    get_json(self.core.transport.as_ref(), &url).await
  }

  /// Get up to `limit` votes, default 100.
  ///
  /// The service caps the listing at 500; larger limits are sent unchanged
  /// and the service decides what to return.
  #[instrument(skip(self))]
  pub async fn votes(&self, limit: Option<u32>) -> Result<VoteList> {
    let limit = Self::limit(limit);
    let url = self.core.urls.build(ObjectType::Servers, ElementType::Votes, &[("limit", limit.to_string())]);
    get_json(self.core.transport.as_ref(), &url).await
  }

  /// Get up to `limit` top voters, default 100. Same cap as [`Self::votes`].
  #[instrument(skip(self))]
  pub async fn voters(&self, limit: Option<u32>) -> Result<VoterList> {
    let limit = Self::limit(limit);
    let url = self.core.urls.build(ObjectType::Servers, ElementType::Voters, &[("limit", limit.to_string())]);
    get_json(self.core.transport.as_ref(), &url).await
  }

  fn limit(requested: Option<u32>) -> u32 {
    let limit = requested.unwrap_or(DEFAULT_VOTE_LIMIT);
    if limit > MAX_VOTE_LIMIT {
      debug!("limit {} exceeds the service maximum of {}", limit, MAX_VOTE_LIMIT);
    }
    limit
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::UrlBuilder;
  use crate::test_utils::{Call, StubTransport, query};
  use std::sync::Arc;
  use tsl_core::{Config, Error};

  const VOTES: &str = r#"{"name": "n", "address": "a", "port": "7777", "month": "202403",
    "votes": [{"timestamp": 1709300000, "nickname": "Ruby", "claimed": "0"}, null]}"#;

  fn endpoints(stub: Arc<StubTransport>) -> ServerEndpoints {
    let urls = Arc::new(UrlBuilder::new(&Config::default_with_key("k")).unwrap());
    ServerEndpoints::new(EndpointCore::new(stub, urls))
  }

  fn get_params(stub: &StubTransport) -> Vec<(String, String)> {
    match &stub.calls()[..] {
      [Call::Get(url)] => query(url),
      other => panic!("expected one GET, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_votes_default_limit() {
    let stub = Arc::new(StubTransport::new().respond(VOTES));
    let list = endpoints(stub.clone()).votes(None).await.unwrap();
    assert_eq!(list.len(), 1);

    let params = get_params(&stub);
    assert!(params.contains(&("object".into(), "servers".into())));
    assert!(params.contains(&("element".into(), "votes".into())));
    assert!(params.contains(&("limit".into(), "100".into())));
    assert!(params.contains(&("key".into(), "k".into())));
  }

  #[tokio::test]
  async fn test_over_limit_passed_through() {
    let stub = Arc::new(StubTransport::new().respond(VOTES));
    endpoints(stub.clone()).votes(Some(900)).await.unwrap();
    assert!(get_params(&stub).contains(&("limit".into(), "900".into())));
  }

  #[tokio::test]
  async fn test_voters_element() {
    let stub = Arc::new(StubTransport::new().respond(
      r#"{"name": "n", "address": "a", "port": 1, "month": "202403", "voters": [{"nickname": "Ruby", "votes": 3}]}"#,
    ));
    let list = endpoints(stub.clone()).voters(Some(10)).await.unwrap();
    assert_eq!(list.get(0).unwrap().to_string(), "Ruby: 3");

    let params = get_params(&stub);
    assert!(params.contains(&("element".into(), "voters".into())));
    assert!(params.contains(&("limit".into(), "10".into())));
  }

  #[tokio::test]
  async fn test_detail_malformed_json() {
    let stub = Arc::new(StubTransport::new().respond("{\"id\": "));
    let result = endpoints(stub).detail().await;
    assert!(matches!(result, Err(Error::Parse(_))));
  }

  #[tokio::test]
  async fn test_transport_error_surfaces_unchanged() {
    let stub = Arc::new(StubTransport::new().fail("connection reset"));
    match endpoints(stub.clone()).detail().await {
      Err(Error::Http(msg)) => assert_eq!(msg, "connection reset"),
      other => panic!("Expected Http error, got {:?}", other),
    }
    assert_eq!(stub.calls().len(), 1);
  }
}
