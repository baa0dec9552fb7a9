//! Endpoint groups, one per `object` the API exposes

pub mod servers;
pub mod votes;

use crate::transport::Transport;
use std::sync::Arc;
use tsl_core::{Config, ElementType, ObjectType, Result};
use url::Url;

/// Builds request URLs against the configured API root.
///
/// Every URL carries `object`, `element`, the caller's extra parameters and
/// finally `key`. Values are form-encoded.
#[derive(Clone)]
pub struct UrlBuilder {
  base_url: Url,
  api_key: String,
}

impl UrlBuilder {
  /// Create a builder from a validated config
  pub fn new(config: &Config) -> Result<Self> {
    config.validate()?;
    Ok(Self { base_url: config.parsed_base_url()?, api_key: config.api_key.clone() })
  }

  /// Build the full URL for an API request
  pub fn build(&self, object: ObjectType, element: ElementType, params: &[(&str, String)]) -> Url {
    let mut url = self.base_url.clone();
    {
      let mut query_pairs = url.query_pairs_mut();
      query_pairs.append_pair("object", &object.to_string());
      query_pairs.append_pair("element", &element.to_string());
      for (key, value) in params {
        query_pairs.append_pair(key, value);
      }
      query_pairs.append_pair("key", &self.api_key);
    }
    url
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }
}

impl std::fmt::Debug for UrlBuilder {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("UrlBuilder")
      .field("base_url", &self.base_url.as_str())
      .field("api_key", &"***")
      .finish()
  }
}

/// Common endpoint structure
///
/// All endpoint groups hold the shared transport and URL builder.
#[derive(Debug, Clone)]
pub struct EndpointCore {
  /// Transport every request goes through
  pub transport: Arc<dyn Transport>,
  /// Key-bearing URL builder
  pub urls: Arc<UrlBuilder>,
}

impl EndpointCore {
  /// Create a new endpoint core
  pub fn new(transport: Arc<dyn Transport>, urls: Arc<UrlBuilder>) -> Self {
    Self { transport, urls }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn builder() -> UrlBuilder {
    UrlBuilder::new(&Config::default_with_key("k3y")).unwrap()
  }

  #[test]
  fn test_build_url() {
    let url = builder().build(ObjectType::Servers, ElementType::Votes, &[("limit", "100".to_string())]);
    assert_eq!(
      url.as_str(),
      "https://terraria-servers.com/api/?object=servers&element=votes&limit=100&key=k3y"
    );
  }

  #[test]
  fn test_values_are_encoded() {
    let url = builder().build(ObjectType::Votes, ElementType::Claim, &[("username", "Ruby Rose&co".to_string())]);
    assert!(url.as_str().contains("username=Ruby+Rose%26co"));
    let decoded: Vec<_> = url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
    assert!(decoded.contains(&("username".to_string(), "Ruby Rose&co".to_string())));
  }

  #[test]
  fn test_blank_key_rejected() {
    let result = UrlBuilder::new(&Config::default_with_key(" "));
    assert!(matches!(result, Err(tsl_core::Error::InvalidArgument(_))));
  }

  #[test]
  fn test_debug_hides_key() {
    assert!(!format!("{:?}", builder()).contains("k3y"));
  }
}
