//! Reserved-key decoder.
//!
//! Turns a raw footer map into the structured payload stored under the
//! reserved key. The state machine is:
//!
//! ```text
//! START -> (map absent or empty?) -> EMPTY
//!       -> decode keys/values     -> FAILED(encoding)
//!       -> (reserved key absent?) -> EMPTY
//!       -> parse payload          -> DONE | FAILED(payload parse)
//! ```
//!
//! "No map", "empty map" and "map without the reserved key" all produce the
//! same empty JSON object. [`DecodedPayload::source`] records which branch
//! was taken for callers that want to report it.

mod error;

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};
use snafu::{ResultExt, ensure};

pub use error::{DecodeError, DecodeResult};

use crate::metadata::{DecodedMetadataMap, RESERVED_KEY, RawKeyValues};
use error::{
    InvalidKeyEncodingSnafu, InvalidValueEncodingSnafu, PayloadParseSnafu, PayloadTooDeepSnafu,
};

/// Deepest array/object nesting a payload may use.
///
/// serde_json's own recursion guard stops at 128 levels; it is disabled in
/// favour of this bound, which is checked before parsing starts.
pub const MAX_PAYLOAD_DEPTH: usize = 1000;

/// Which branch of the decoder produced a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadSource {
    /// The footer carried no key-value metadata.
    NoMetadata,
    /// The footer carried a key-value list with zero entries.
    EmptyMetadata,
    /// Metadata was present but the reserved key was not among its entries.
    KeyMissing {
        /// Number of decoded entries that were inspected.
        entries: usize,
    },
    /// The reserved key was found and its value parsed.
    Found,
}

impl fmt::Display for PayloadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadSource::NoMetadata => write!(f, "no key-value metadata in footer"),
            PayloadSource::EmptyMetadata => write!(f, "key-value metadata present but empty"),
            PayloadSource::KeyMissing { entries } => {
                write!(f, "reserved key not found among {entries} metadata entries")
            }
            PayloadSource::Found => write!(f, "reserved key found"),
        }
    }
}

/// A decoded document together with the branch that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedPayload {
    /// How the document was obtained.
    pub source: PayloadSource,
    /// The structured payload, or an empty object.
    pub document: Value,
}

impl DecodedPayload {
    fn empty(source: PayloadSource) -> Self {
        Self {
            source,
            document: Value::Object(Map::new()),
        }
    }

    /// True when no structured metadata was found (any of the empty branches).
    pub fn is_empty_document(&self) -> bool {
        self.source != PayloadSource::Found
    }
}

/// Decode every key and value of `raw` from UTF-8.
///
/// Fails on the first invalid key or value; no partial map is returned.
pub fn decode_map<R>(raw: &R) -> DecodeResult<DecodedMetadataMap>
where
    R: RawKeyValues + ?Sized,
{
    let mut decoded = DecodedMetadataMap::with_capacity(raw.raw_len());

    for (index, (key, value)) in raw.raw_pairs().enumerate() {
        let key = std::str::from_utf8(key).context(InvalidKeyEncodingSnafu {
            index,
            lossy: String::from_utf8_lossy(key),
        })?;
        let value = std::str::from_utf8(value).context(InvalidValueEncodingSnafu { key })?;
        decoded.insert(key.to_owned(), value.to_owned());
    }

    Ok(decoded)
}

/// Run the full decode state machine, probing `key` for the payload.
pub fn decode_payload<R>(raw: Option<&R>, key: &str) -> DecodeResult<DecodedPayload>
where
    R: RawKeyValues + ?Sized,
{
    let raw = match raw {
        None => {
            tracing::debug!("no key-value metadata; emitting empty document");
            return Ok(DecodedPayload::empty(PayloadSource::NoMetadata));
        }
        Some(raw) if raw.is_raw_empty() => {
            tracing::debug!("key-value metadata is empty; emitting empty document");
            return Ok(DecodedPayload::empty(PayloadSource::EmptyMetadata));
        }
        Some(raw) => raw,
    };

    let decoded = decode_map(raw)?;

    let Some(text) = decoded.get(key) else {
        tracing::debug!(
            key,
            entries = decoded.len(),
            "reserved key absent; emitting empty document"
        );
        return Ok(DecodedPayload::empty(PayloadSource::KeyMissing {
            entries: decoded.len(),
        }));
    };

    let document = parse_payload(key, text)?;
    tracing::debug!(key, bytes = text.len(), "parsed reserved-key payload");

    Ok(DecodedPayload {
        source: PayloadSource::Found,
        document,
    })
}

/// Deepest `[`/`{` nesting in `text`, ignoring brackets inside strings.
fn nesting_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for b in text.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

/// Parse `text` as a single JSON document.
///
/// Numbers keep their literal text, so integers wider than 64 bits and
/// exponents outside the `f64` range survive unchanged.
fn parse_payload(key: &str, text: &str) -> DecodeResult<Value> {
    let depth = nesting_depth(text);
    ensure!(
        depth <= MAX_PAYLOAD_DEPTH,
        PayloadTooDeepSnafu {
            key,
            depth,
            limit: MAX_PAYLOAD_DEPTH,
        }
    );

    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let document = Value::deserialize(&mut de).context(PayloadParseSnafu { key })?;
    de.end().context(PayloadParseSnafu { key })?;
    Ok(document)
}

/// Decode the payload stored under [`RESERVED_KEY`].
///
/// Returns an empty JSON object when the map is absent, empty, or lacks the
/// reserved key.
pub fn decode<R>(raw: Option<&R>) -> DecodeResult<Value>
where
    R: RawKeyValues + ?Sized,
{
    decode_payload(raw, RESERVED_KEY).map(|payload| payload.document)
}
