//! Core engine for recovering application metadata from Parquet footers.
//!
//! Producers that embed a structured record in a Parquet file store it as a
//! JSON string under a reserved key (`"metadata"`) inside the footer's generic
//! key-value map. This crate provides:
//!
//! - The raw and decoded metadata map model, plus the [`RawKeyValues`]
//!   capability trait so decoding never depends on a concrete container
//!   (`metadata` module).
//! - A footer-only reader built on the `parquet` crate (`footer` module).
//! - The reserved-key decoder that collapses "no map", "empty map" and
//!   "key missing" into an empty document, and fails loudly on bad UTF-8 or
//!   malformed JSON (`decode` module).
//! - Pretty rendering with 4-space indentation (`render` module).
//! - The pure `(path) -> Result<Document, Error>` pipeline used by the CLI
//!   (`pipeline` module).
#![deny(missing_docs)]
pub mod decode;
pub mod footer;
pub mod metadata;
pub mod pipeline;
pub mod render;

#[cfg(test)]
pub(crate) mod test_util;

pub use decode::{
    DecodeError, DecodeResult, DecodedPayload, MAX_PAYLOAD_DEPTH, PayloadSource, decode, decode_map,
    decode_payload,
};
pub use footer::{
    FooterError, FooterResult, read_footer_metadata, read_footer_metadata_from_bytes,
};
pub use metadata::{DecodedMetadataMap, RESERVED_KEY, RawKeyValues, RawMetadataMap};
pub use pipeline::{
    MetadataError, MetadataResult, dump_metadata, dump_metadata_with_key, dump_raw_metadata,
};
pub use render::{to_pretty_json, write_document};
