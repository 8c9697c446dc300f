//! Insertion-ordered category counts
//!
//! A [`Distribution`] counts records per categorical key and remembers the
//! order in which each distinct key was first seen. That order is the tie
//! breaker for top-N rankings, so rankings are deterministic for a given
//! input sequence.

use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Mapping from category to record count, iterated in first-encounter order
#[derive(Debug, Clone)]
pub struct Distribution<K> {
    entries: Vec<(K, usize)>,
    positions: HashMap<K, usize>,
}

/// One entry of a top-N ranking
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RankedEntry<K> {
    pub key: K,
    pub count: usize,
}

impl<K: Eq + Hash + Clone> Distribution<K> {
    /// Create an empty distribution
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Count one occurrence of `key`
    pub fn increment(&mut self, key: &K) {
        match self.positions.get(key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key.clone(), 1));
            }
        }
    }

    /// Count for `key`, 0 when never seen
    pub fn get(&self, key: &K) -> usize {
        self.positions
            .get(key)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate `(key, count)` pairs in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    /// Distinct keys in first-encounter order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// The `n` keys with the highest counts
    ///
    /// Sorted by count descending; equal counts keep first-encounter order
    /// (`sort_by` is stable).
    pub fn top_n(&self, n: usize) -> Vec<RankedEntry<K>> {
        let mut ranked: Vec<&(K, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(n)
            .map(|(key, count)| RankedEntry {
                key: key.clone(),
                count: *count,
            })
            .collect()
    }

    /// Rounded integer percentage of the total held by `key`
    pub fn share(&self, key: &K) -> u32 {
        rounded_percentage(self.get(key), self.total())
    }
}

impl<K: Eq + Hash + Clone> Default for Distribution<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Distribution<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut distribution = Self::new();
        for key in iter {
            distribution.increment(&key);
        }
        distribution
    }
}

impl<K: PartialEq> PartialEq for Distribution<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Display> Serialize for Distribution<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.entries
                .iter()
                .map(|(key, count)| (key.to_string(), *count)),
        )
    }
}

/// Percentage of `part` in `total`, rounded to the nearest integer
///
/// Uses `f64::round` (half away from zero), which for these non-negative
/// values is round-half-up. A zero total yields 0.
pub fn rounded_percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        (part as f64 / total as f64 * 100.0).round() as u32
    }
}
