//! Fixed-position sequences with empty slots.

use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Index;

/// The service returns listing arrays that may contain `null` entries.
///
/// Positions are preserved exactly as received, so indexing reflects the
/// original array, while [`Slots::len`] counts only the filled entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Slots<T>(Vec<Option<T>>);

impl<T> Slots<T> {
  pub fn new(slots: Vec<Option<T>>) -> Self {
    Self(slots)
  }

  /// Number of filled slots
  pub fn len(&self) -> usize {
    self.0.iter().filter(|slot| slot.is_some()).count()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Length of the array as received, empty slots included
  pub fn slot_count(&self) -> usize {
    self.0.len()
  }

  /// Entry at its original position; `None` for empty or out of range
  pub fn get(&self, index: usize) -> Option<&T> {
    self.0.get(index).and_then(Option::as_ref)
  }

  /// Raw slots, including the empty ones
  pub fn as_slice(&self) -> &[Option<T>] {
    &self.0
  }

  /// Filled entries in order
  pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
    self.0.iter().flatten()
  }
}

impl<T> Default for Slots<T> {
  fn default() -> Self {
    Self(Vec::new())
  }
}

impl<T> Index<usize> for Slots<T> {
  type Output = Option<T>;

  fn index(&self, index: usize) -> &Self::Output {
    &self.0[index]
  }
}

impl<'a, T> IntoIterator for &'a Slots<T> {
  type Item = &'a T;
  type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<T>>>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter().flatten()
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Slots<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Ok(Self(Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default()))
  }
}
