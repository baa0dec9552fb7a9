use anyhow::{Context, Result};
use std::env;
use tsl_core::Config;

/// Build the client config from the `--key` flag and the `TSL_*` environment.
///
/// clap already falls back to `TSL_API_KEY` for the key.
pub fn load(key: Option<String>) -> Result<Config> {
  from_lookup(key, |name| env::var(name).ok())
}

fn from_lookup<F>(key: Option<String>, lookup: F) -> Result<Config>
where
  F: Fn(&str) -> Option<String>,
{
  let api_key = key.context("No API key: pass --key or set TSL_API_KEY")?;

  let mut config = Config::default_with_key(api_key);
  if let Some(base_url) = lookup("TSL_BASE_URL") {
    config.base_url = base_url;
  }
  if let Some(timeout) = lookup("TSL_TIMEOUT_SECS") {
    config.timeout_secs =
      timeout.parse().with_context(|| format!("TSL_TIMEOUT_SECS is not a number: {}", timeout))?;
  }
  if let Some(user_agent) = lookup("TSL_USER_AGENT") {
    config.user_agent = user_agent;
  }

  config.validate().context("Invalid configuration")?;
  Ok(config)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> =
      vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| vars.get(name).cloned()
  }

  #[test]
  fn test_defaults() {
    let config = from_lookup(Some("abc".to_string()), lookup(&[])).unwrap();
    assert_eq!(config.api_key, "abc");
    assert_eq!(config.base_url, tsl_core::TERRARIA_SERVERS_BASE_URL);
    assert_eq!(config.timeout_secs, tsl_core::DEFAULT_TIMEOUT_SECS);
  }

  #[test]
  fn test_overrides() {
    let vars = lookup(&[
      ("TSL_BASE_URL", "http://localhost:8080/api/"),
      ("TSL_TIMEOUT_SECS", "5"),
      ("TSL_USER_AGENT", "votebot/2"),
    ]);
    let config = from_lookup(Some("abc".to_string()), vars).unwrap();
    assert_eq!(config.base_url, "http://localhost:8080/api/");
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.user_agent, "votebot/2");
  }

  #[test]
  fn test_missing_or_bad_values() {
    assert!(from_lookup(None, lookup(&[])).is_err());
    assert!(from_lookup(Some(" ".to_string()), lookup(&[])).is_err());
    assert!(from_lookup(Some("abc".to_string()), lookup(&[("TSL_TIMEOUT_SECS", "soon")])).is_err());
    assert!(from_lookup(Some("abc".to_string()), lookup(&[("TSL_BASE_URL", "nowhere")])).is_err());
  }
}
