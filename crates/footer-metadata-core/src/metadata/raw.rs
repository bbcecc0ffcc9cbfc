//! Raw footer key-value metadata.
//!
//! Parquet stores application metadata as a flat list of key/value pairs.
//! At this layer both sides are treated as opaque bytes; nothing here
//! assumes they are valid UTF-8. Validation happens in [`crate::decode`].

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use parquet::file::metadata::KeyValue;

/// Iterate raw `(key, value)` byte pairs of a metadata container.
///
/// The decoder only needs this capability, so it never depends on the
/// concrete container a reader hands back (a [`RawMetadataMap`], the
/// `parquet` crate's [`KeyValue`] list, or a plain map in tests).
/// No iteration order is guaranteed.
pub trait RawKeyValues {
    /// Iterate every stored pair.
    fn raw_pairs(&self) -> Box<dyn Iterator<Item = (&[u8], &[u8])> + '_>;

    /// Number of stored pairs.
    fn raw_len(&self) -> usize;

    /// True when the container holds no pairs at all.
    fn is_raw_empty(&self) -> bool {
        self.raw_len() == 0
    }
}

/// A single opaque entry of a [`RawMetadataMap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEntry {
    /// Key bytes as stored in the footer.
    pub key: Vec<u8>,
    /// Value bytes as stored in the footer.
    pub value: Vec<u8>,
}

/// Key-value metadata exactly as read from a file footer.
///
/// Keys are unique: inserting an existing key replaces its value in place.
/// The map is built once per read and never mutated afterwards by this crate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawMetadataMap {
    entries: Vec<RawEntry>,
}

impl RawMetadataMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from the footer's `KeyValue` list.
    ///
    /// A `KeyValue` with no value is stored with an empty value, the same way
    /// Arrow-based readers surface it.
    pub fn from_parquet(kvs: &[KeyValue]) -> Self {
        let mut map = Self::new();
        for kv in kvs {
            let value = kv.value.as_deref().unwrap_or_default();
            map.insert(kv.key.as_bytes(), value.as_bytes());
        }
        map
    }

    /// Insert a pair. A repeated key keeps its first position and takes the
    /// newer value.
    pub fn insert(&mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(RawEntry { key, value }),
        }
    }

    /// Raw value stored under `key`, if any.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_slice())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the map is present but holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in the order they were read.
    pub fn iter(&self) -> impl Iterator<Item = &RawEntry> {
        self.entries.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for RawMetadataMap
where
    K: Into<Vec<u8>>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl RawKeyValues for RawMetadataMap {
    fn raw_pairs(&self) -> Box<dyn Iterator<Item = (&[u8], &[u8])> + '_> {
        Box::new(
            self.entries
                .iter()
                .map(|e| (e.key.as_slice(), e.value.as_slice())),
        )
    }

    fn raw_len(&self) -> usize {
        self.entries.len()
    }
}

impl RawKeyValues for [KeyValue] {
    fn raw_pairs(&self) -> Box<dyn Iterator<Item = (&[u8], &[u8])> + '_> {
        Box::new(self.iter().map(|kv| {
            let value = kv.value.as_deref().unwrap_or_default();
            (kv.key.as_bytes(), value.as_bytes())
        }))
    }

    fn raw_len(&self) -> usize {
        self.len()
    }
}

impl<K, V> RawKeyValues for [(K, V)]
where
    K: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    fn raw_pairs(&self) -> Box<dyn Iterator<Item = (&[u8], &[u8])> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }

    fn raw_len(&self) -> usize {
        self.len()
    }
}

impl<K, V> RawKeyValues for Vec<(K, V)>
where
    K: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    fn raw_pairs(&self) -> Box<dyn Iterator<Item = (&[u8], &[u8])> + '_> {
        self.as_slice().raw_pairs()
    }

    fn raw_len(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> RawKeyValues for HashMap<K, V, S>
where
    K: AsRef<[u8]>,
    V: AsRef<[u8]>,
    S: BuildHasher,
{
    fn raw_pairs(&self) -> Box<dyn Iterator<Item = (&[u8], &[u8])> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }

    fn raw_len(&self) -> usize {
        self.len()
    }
}

impl<K, V> RawKeyValues for BTreeMap<K, V>
where
    K: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    fn raw_pairs(&self) -> Box<dyn Iterator<Item = (&[u8], &[u8])> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }

    fn raw_len(&self) -> usize {
        self.len()
    }
}
