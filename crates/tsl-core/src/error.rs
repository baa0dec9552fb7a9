use thiserror::Error;

/// The main error type for tsl-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Bad caller input, raised before any request is made
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  /// A wire value did not match its expected scalar encoding
  #[error("Invalid format: {0}")]
  InvalidFormat(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Response body did not match the expected shape
  #[error("Parse error: {0}")]
  Parse(String),
}

/// Result type alias for tsl-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages() {
    assert_eq!(Error::Http("HTTP error: 502".to_string()).to_string(), "HTTP error: HTTP error: 502");
    assert_eq!(Error::ApiKey("TSL_API_KEY not set".to_string()).to_string(), "Failed to retrieve API key: TSL_API_KEY not set");
    assert_eq!(Error::InvalidArgument("x".to_string()).to_string(), "Invalid argument: x");
  }
}
