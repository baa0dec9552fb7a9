//! Terraria version numbers as reported by the server detail endpoint.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;
use tsl_core::{Error, Result};

/// A `major.minor[.build[.revision]]` version.
///
/// Ordering compares components left to right; a missing component sorts
/// before any present one, so `1.4` < `1.4.0` < `1.4.4.9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
  major: u32,
  minor: u32,
  build: Option<u32>,
  revision: Option<u32>,
}

impl ServerVersion {
  pub fn new(major: u32, minor: u32) -> Self {
    Self { major, minor, build: None, revision: None }
  }

  pub fn with_build(self, build: u32) -> Self {
    Self { build: Some(build), ..self }
  }

  pub fn with_revision(self, revision: u32) -> Self {
    Self { build: Some(self.build.unwrap_or(0)), revision: Some(revision), ..self }
  }

  pub fn major(&self) -> u32 {
    self.major
  }

  pub fn minor(&self) -> u32 {
    self.minor
  }

  pub fn build(&self) -> Option<u32> {
    self.build
  }

  pub fn revision(&self) -> Option<u32> {
    self.revision
  }
}

impl FromStr for ServerVersion {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let invalid = || Error::InvalidFormat(format!("{:?} is not a version number", s));
    let parts = s
      .trim()
      .split('.')
      .map(|part| {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
          return Err(invalid());
        }
        part.parse::<u32>().map_err(|_| invalid())
      })
      .collect::<Result<Vec<_>>>()?;

    match parts[..] {
      [major, minor] => Ok(Self::new(major, minor)),
      [major, minor, build] => Ok(Self::new(major, minor).with_build(build)),
      [major, minor, build, revision] => {
        Ok(Self::new(major, minor).with_build(build).with_revision(revision))
      }
      _ => Err(invalid()),
    }
  }
}

impl fmt::Display for ServerVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}", self.major, self.minor)?;
    if let Some(build) = self.build {
      write!(f, ".{}", build)?;
      if let Some(revision) = self.revision {
        write!(f, ".{}", revision)?;
      }
    }
    Ok(())
  }
}

impl Serialize for ServerVersion {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for ServerVersion {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(de::Error::custom)
  }
}
