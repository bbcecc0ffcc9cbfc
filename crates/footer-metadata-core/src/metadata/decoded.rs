//! UTF-8 view over footer metadata.

use serde_json::{Map, Value};

/// Footer metadata with every key and value validated as UTF-8.
///
/// Produced by [`crate::decode::decode_map`]. It only exists to perform the
/// reserved-key lookup (or to dump the whole map in raw mode), so it is
/// never mutated once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedMetadataMap {
    entries: Vec<(String, String)>,
}

impl DecodedMetadataMap {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Last write wins for duplicate keys, in the first key's position.
    pub(crate) fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Text value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries were decoded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, value)` pairs in footer order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert into a JSON object whose values are the raw text strings.
    pub fn into_json(self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        Value::Object(map)
    }
}
