//! Ordered, deduplicated record of called tricks.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Tricks called this session, in call order, each name at most once.
///
/// Matching is exact: `"Kickflip"` and `"kickflip"` are different tricks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TrickLog {
    entries: Vector<String>,
    seen: FxHashSet<String>,
}

impl TrickLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trick.
    ///
    /// Returns false (and leaves the log untouched) if the name is empty
    /// or already logged.
    pub fn insert(&mut self, name: &str) -> bool {
        if name.is_empty() || self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.entries.push_back(name.to_string());
        true
    }

    /// Check if a trick has been logged.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Number of logged tricks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in call order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.seen.clear();
    }
}

impl From<Vec<String>> for TrickLog {
    fn from(names: Vec<String>) -> Self {
        let mut log = Self::new();
        for name in &names {
            log.insert(name);
        }
        log
    }
}

impl From<TrickLog> for Vec<String> {
    fn from(log: TrickLog) -> Self {
        log.entries.into_iter().collect()
    }
}
