//! Scripted [`Transport`] for unit tests

use crate::transport::Transport;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tsl_core::{Error, Result};
use url::Url;

/// A recorded request
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
  Get(Url),
  Post(Url, String),
}

/// Replays queued responses in order and records every call
#[derive(Debug, Default)]
pub struct StubTransport {
  responses: Mutex<VecDeque<Result<String>>>,
  calls: Mutex<Vec<Call>>,
}

impl StubTransport {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn respond(self, body: &str) -> Self {
    self.responses.lock().unwrap().push_back(Ok(body.to_string()));
    self
  }

  pub fn fail(self, message: &str) -> Self {
    self.responses.lock().unwrap().push_back(Err(Error::Http(message.to_string())));
    self
  }

  pub fn calls(&self) -> Vec<Call> {
    self.calls.lock().unwrap().clone()
  }

  fn next(&self) -> Result<String> {
    self
      .responses
      .lock()
      .unwrap()
      .pop_front()
      .unwrap_or_else(|| Err(Error::Http("no scripted response".to_string())))
  }
}

#[async_trait]
impl Transport for StubTransport {
  async fn get_text(&self, url: &Url) -> Result<String> {
    self.calls.lock().unwrap().push(Call::Get(url.clone()));
    self.next()
  }

  async fn post_text(&self, url: &Url, body: String) -> Result<String> {
    self.calls.lock().unwrap().push(Call::Post(url.clone(), body));
    self.next()
  }
}

/// Query parameters of a URL as owned pairs
pub fn query(url: &Url) -> Vec<(String, String)> {
  url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
}
