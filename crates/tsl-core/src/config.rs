//! Configuration management for the terraria-servers.com client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the terraria-servers.com client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Server API key issued by terraria-servers.com
  pub api_key: String,

  /// Base URL for the API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// User agent sent with every request
  pub user_agent: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key =
      env::var("TSL_API_KEY").map_err(|_| Error::ApiKey("TSL_API_KEY not set".to_string()))?;

    let timeout_secs = env::var("TSL_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid TSL_TIMEOUT_SECS".to_string()))?;

    let base_url =
      env::var("TSL_BASE_URL").unwrap_or_else(|_| crate::TERRARIA_SERVERS_BASE_URL.to_string());

    let user_agent =
      env::var("TSL_USER_AGENT").unwrap_or_else(|_| crate::DEFAULT_USER_AGENT.to_string());

    Ok(Config { api_key, base_url, timeout_secs, user_agent })
  }

  /// Create a config with default values
  pub fn default_with_key(api_key: impl Into<String>) -> Self {
    Config {
      api_key: api_key.into(),
      base_url: crate::TERRARIA_SERVERS_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      user_agent: crate::DEFAULT_USER_AGENT.to_string(),
    }
  }

  /// Point the config at a different API root, mostly for mock servers
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Check the config before a client is built from it.
  ///
  /// A blank key is a caller mistake and fails with [`Error::InvalidArgument`];
  /// an unparseable base URL is a [`Error::Config`] problem.
  pub fn validate(&self) -> Result<()> {
    if self.api_key.trim().is_empty() {
      return Err(Error::InvalidArgument("API key cannot be empty".to_string()));
    }
    self.parsed_base_url()?;
    Ok(())
  }

  /// The base URL as a [`Url`]
  pub fn parsed_base_url(&self) -> Result<Url> {
    Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", self.base_url, e)))
  }
}
