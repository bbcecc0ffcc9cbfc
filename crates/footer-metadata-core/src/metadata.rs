//! Metadata model.
//!
//! This module contains **pure** data types with no IO: the raw byte-string
//! map exactly as it sits in a Parquet footer, and the UTF-8 decoded view the
//! decoder builds from it. Anything that touches files lives in
//! [`crate::footer`].

pub mod decoded;
pub mod raw;

pub use decoded::DecodedMetadataMap;
pub use raw::{RawEntry, RawKeyValues, RawMetadataMap};

/// Key under which producers store the JSON payload in the footer map.
pub const RESERVED_KEY: &str = "metadata";
