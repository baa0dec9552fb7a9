//! HTTP transport layer for terraria-servers.com requests
//!
//! The facade only talks to the [`Transport`] trait, so the networking stack
//! can be swapped for a stub in tests. [`ReqwestTransport`] is the real one.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, warn};
use tsl_core::{Config, Error, Result};
use url::Url;

/// Longest body excerpt carried in an error message
const BODY_EXCERPT_CHARS: usize = 200;

/// Issues the raw HTTP requests the facade needs.
///
/// Implementations are shared behind an `Arc` and must be usable from
/// several tasks at once.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
  /// GET `url` and return the body.
  ///
  /// Network failures and non-2xx statuses are [`Error::Http`].
  async fn get_text(&self, url: &Url) -> Result<String>;

  /// POST `body` to `url` and return the response body whatever the status.
  ///
  /// Only a failure to complete the exchange is an [`Error::Http`].
  async fn post_text(&self, url: &Url, body: String) -> Result<String>;
}

/// GET `url` and deserialize the body as JSON.
///
/// Malformed JSON and values rejected by a scalar decoder are both
/// [`Error::Parse`].
pub async fn get_json<T>(transport: &dyn Transport, url: &Url) -> Result<T>
where
  T: DeserializeOwned,
{
  let text = transport.get_text(url).await?;
  debug!("Response body length: {} bytes", text.len());

  serde_json::from_str::<T>(&text).map_err(|e| {
    error!("Failed to parse JSON response: {}", e);
    Error::Parse(format!("Failed to parse response: {}. Response: {}", e, excerpt(&text)))
  })
}

fn excerpt(text: &str) -> String {
  text.chars().take(BODY_EXCERPT_CHARS).collect()
}

/// Render a request URL for logs with the API key masked
pub(crate) fn redacted(url: &Url) -> String {
  let mut masked = url.clone();
  let pairs: Vec<(String, String)> = url
    .query_pairs()
    .map(|(k, v)| {
      let value = if k == "key" { "***".to_string() } else { v.into_owned() };
      (k.into_owned(), value)
    })
    .collect();
  masked.query_pairs_mut().clear().extend_pairs(pairs);
  masked.to_string()
}

/// [`Transport`] backed by one pooled `reqwest::Client`.
///
/// Every request carries `Accept: application/json`. Cloning is cheap and
/// clones share the connection pool.
#[derive(Clone)]
pub struct ReqwestTransport {
  client: Client,
  timeout: Duration,
}

impl ReqwestTransport {
  /// Create a new transport from the timeout and user agent in `config`
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
      .timeout(timeout)
      .user_agent(config.user_agent.clone())
      .default_headers(headers)
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, timeout })
  }

  /// Wrap an already configured client. The client's own settings govern
  /// requests; `timeout` is only reported back by [`Self::timeout`].
  pub fn from_client(client: Client, timeout: Duration) -> Self {
    Self { client, timeout }
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl fmt::Debug for ReqwestTransport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ReqwestTransport").field("timeout", &self.timeout).finish()
  }
}

#[async_trait]
impl Transport for ReqwestTransport {
  async fn get_text(&self, url: &Url) -> Result<String> {
    debug!("GET {}", redacted(url));

    let response = self
      .client
      .get(url.clone())
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e.without_url())))?;

    let status = response.status();
    if !status.is_success() {
      error!("Request failed with status: {}", status);
      return Err(Error::Http(format!("HTTP error: {}", status)));
    }

    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e.without_url())))?;

    #[cfg(feature = "debug-logging")]
    debug!("Response body: {}", excerpt(&text));

    Ok(text)
  }

  async fn post_text(&self, url: &Url, body: String) -> Result<String> {
    debug!("POST {}", redacted(url));

    let response = self
      .client
      .post(url.clone())
      .body(body)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e.without_url())))?;

    let status = response.status();
    if !status.is_success() {
      warn!("POST returned status: {}", status);
    }

    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e.without_url())))?;

    #[cfg(feature = "debug-logging")]
    debug!("Response body: {}", excerpt(&text));

    Ok(text)
  }
}
