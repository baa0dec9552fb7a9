pub mod claim;
pub mod server;
pub mod votes;

use anyhow::{Context, Result};
use serde::Serialize;

/// How command results reach stdout
#[derive(Debug, Clone, Copy)]
pub struct Output {
  json: bool,
}

impl Output {
  pub fn new(json: bool) -> Self {
    Self { json }
  }

  /// Print `value` as pretty JSON when `--json` is set, otherwise the text
  /// produced by `render`.
  pub fn emit<T, F>(&self, value: &T, render: F) -> Result<()>
  where
    T: Serialize,
    F: FnOnce(&T) -> String,
  {
    if self.json {
      let text = serde_json::to_string_pretty(value).context("Failed to encode output")?;
      println!("{}", text);
    } else {
      println!("{}", render(value));
    }
    Ok(())
  }
}
