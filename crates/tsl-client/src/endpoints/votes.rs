//! Vote claim endpoints (`object=votes&element=claim`)

use super::EndpointCore;
use tracing::{info, instrument, warn};
use tsl_core::{ElementType, Error, ObjectType, Result};
use tsl_models::{ClaimStatus, VoterId};

/// Claim status checks and claim submission
#[derive(Debug, Clone)]
pub struct VoteEndpoints {
  core: EndpointCore,
}

impl VoteEndpoints {
  /// Create a new vote endpoints instance
  pub fn new(core: EndpointCore) -> Self {
    Self { core }
  }

  /// Check whether `voter` voted today and whether that vote was claimed.
  ///
  /// An empty nickname is rejected with [`Error::InvalidArgument`] before any
  /// request is made. A body that is not an integer is an [`Error::Parse`];
  /// an integer outside 0..=2 is reported as [`ClaimStatus::Unknown`].
  #[instrument(skip(self, voter), fields(voter = %voter))]
  pub async fn check_claim(&self, voter: &VoterId) -> Result<ClaimStatus> {
    if let VoterId::Nickname(nickname) = voter {
      if nickname.is_empty() {
        return Err(Error::InvalidArgument("nickname cannot be empty".to_string()));
      }
    }

    let url = self.core.urls.build(ObjectType::Votes, ElementType::Claim, &[voter.query_pair()]);
    let body = self.core.transport.get_text(&url).await?;

    let code: i64 = body
      .trim()
      .parse()
      .map_err(|_| Error::Parse(format!("claim status {:?} is not an integer", body)))?;

    if !ClaimStatus::is_recognized_code(code) {
      warn!("Unrecognised claim status code {}, treating as not voted", code);
    }
    Ok(ClaimStatus::from_code(code))
  }

  /// Mark today's vote by `voter` as claimed.
  ///
  /// Returns true only when the service answers with exactly `1`. Any other
  /// answer, including HTTP errors and transport failures, is `false`: the
  /// service does not distinguish "already claimed", "no vote" and failure.
  #[instrument(skip(self, voter), fields(voter = %voter))]
  pub async fn claim(&self, voter: &VoterId) -> bool {
    let url = self.core.urls.build(ObjectType::Votes, ElementType::Claim, &[voter.query_pair()]);

    match self.core.transport.post_text(&url, String::new()).await {
      Ok(body) if body == "1" => {
        info!("Vote claimed");
        true
      }
      Ok(body) => {
        warn!("Claim not accepted, service answered {:?}", body);
        false
      }
      Err(e) => {
        warn!("Claim request failed: {}", e);
        false
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::UrlBuilder;
  use crate::test_utils::{Call, StubTransport, query};
  use std::sync::Arc;
  use tsl_core::Config;

  fn endpoints(stub: Arc<StubTransport>) -> VoteEndpoints {
    let urls = Arc::new(UrlBuilder::new(&Config::default_with_key("k")).unwrap());
    VoteEndpoints::new(EndpointCore::new(stub, urls))
  }

  #[tokio::test]
  async fn test_empty_nickname_rejected_before_io() {
    let stub = Arc::new(StubTransport::new().respond("2"));
    let result = endpoints(stub.clone()).check_claim(&VoterId::from("")).await;
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert!(stub.calls().is_empty());
  }

  #[tokio::test]
  async fn test_check_claim_codes() {
    for (body, expected) in [
      ("0", ClaimStatus::Unknown),
      ("1", ClaimStatus::Unclaimed),
      ("2", ClaimStatus::Claimed),
      ("2\n", ClaimStatus::Claimed),
      ("7", ClaimStatus::Unknown),
      ("-3", ClaimStatus::Unknown),
    ] {
      let stub = Arc::new(StubTransport::new().respond(body));
      let status = endpoints(stub).check_claim(&VoterId::SteamId(42)).await.unwrap();
      assert_eq!(status, expected, "body {:?}", body);
    }
  }

  #[tokio::test]
  async fn test_check_claim_non_integer_body() {
    let stub = Arc::new(StubTransport::new().respond("Invalid key"));
    let result = endpoints(stub).check_claim(&VoterId::from("Ruby")).await;
    assert!(matches!(result, Err(Error::Parse(_))));
  }

  #[tokio::test]
  async fn test_check_claim_encodes_nickname() {
    let stub = Arc::new(StubTransport::new().respond("1"));
    endpoints(stub.clone()).check_claim(&VoterId::from("Ruby Rose")).await.unwrap();

    match &stub.calls()[..] {
      [Call::Get(url)] => {
        assert!(url.as_str().contains("username=Ruby+Rose"));
        let params = query(url);
        assert!(params.contains(&("object".into(), "votes".into())));
        assert!(params.contains(&("element".into(), "claim".into())));
        assert!(!params.iter().any(|(k, _)| k == "steamid"));
      }
      other => panic!("expected one GET, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_claim_true_only_for_literal_one() {
    for (body, expected) in [("1", true), ("0", false), ("error", false), ("1\n", false), ("", false)] {
      let stub = Arc::new(StubTransport::new().respond(body));
      assert_eq!(endpoints(stub).claim(&VoterId::from("Ruby")).await, expected, "body {:?}", body);
    }
  }

  #[tokio::test]
  async fn test_claim_transport_failure_is_false() {
    let stub = Arc::new(StubTransport::new().fail("timed out"));
    assert!(!endpoints(stub).claim(&VoterId::SteamId(76561198000000001)).await);
  }

  #[tokio::test]
  async fn test_claim_posts_empty_body() {
    let stub = Arc::new(StubTransport::new().respond("1"));
    assert!(endpoints(stub.clone()).claim(&VoterId::SteamId(76561198000000001)).await);

    match &stub.calls()[..] {
      [Call::Post(url, body)] => {
        assert!(body.is_empty());
        assert!(query(url).contains(&("steamid".into(), "76561198000000001".into())));
      }
      other => panic!("expected one POST, got {:?}", other),
    }
  }
}
