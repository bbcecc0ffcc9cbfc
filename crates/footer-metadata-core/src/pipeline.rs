//! Reader -> decoder pipeline.
//!
//! These are the pure entry points the CLI is built on: a path goes in, a
//! JSON document (or an error) comes out. Nothing here prints or exits, so
//! the whole pipeline is testable without a process boundary.

use std::path::Path;

use serde_json::{Map, Value};
use snafu::{ResultExt, Snafu};

use crate::decode::{self, DecodeError, DecodedPayload};
use crate::footer::{self, FooterError};
use crate::metadata::RESERVED_KEY;

/// Any failure along the pipeline: reading the footer or decoding it.
///
/// Both variants name the file in their message.
#[derive(Debug, Snafu)]
pub enum MetadataError {
    /// Opening the file or parsing its footer failed.
    #[snafu(transparent)]
    Footer {
        /// The underlying footer error.
        source: FooterError,
    },

    /// The footer was read but its metadata could not be decoded.
    #[snafu(display("Failed to decode footer metadata of {path}: {source}"))]
    Decode {
        /// The file whose footer was decoded.
        path: String,
        /// The underlying decode error.
        source: DecodeError,
    },
}

/// Convenience alias for pipeline results.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Read the footer of `path` and decode the payload under `key`.
pub fn dump_metadata_with_key(path: &Path, key: &str) -> MetadataResult<DecodedPayload> {
    let raw = footer::read_footer_metadata(path)?;
    let payload = decode::decode_payload(raw.as_ref(), key).context(DecodeSnafu {
        path: path.display().to_string(),
    })?;
    Ok(payload)
}

/// Read the footer of `path` and decode the payload under [`RESERVED_KEY`].
///
/// Returns `{}` when the file has no metadata, empty metadata, or no
/// reserved key.
pub fn dump_metadata(path: &Path) -> MetadataResult<Value> {
    dump_metadata_with_key(path, RESERVED_KEY).map(|payload| payload.document)
}

/// Read the footer of `path` and return every entry as a JSON object of
/// strings, without probing for the reserved key.
///
/// A footer with no metadata yields `{}`.
pub fn dump_raw_metadata(path: &Path) -> MetadataResult<Value> {
    let Some(raw) = footer::read_footer_metadata(path)? else {
        return Ok(Value::Object(Map::new()));
    };
    let decoded = decode::decode_map(&raw).context(DecodeSnafu {
        path: path.display().to_string(),
    })?;
    Ok(decoded.into_json())
}
