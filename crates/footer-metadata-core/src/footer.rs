//! Footer metadata reader.
//!
//! Opens a Parquet file (or an in-memory copy of one) and returns the
//! key-value metadata attached to its schema. Only the footer is parsed;
//! no data pages are touched.
//!
//! The result distinguishes "no metadata list at all" (`Ok(None)`) from
//! "a list with zero entries" (`Ok(Some(map))` with `map.is_empty()`). The
//! decoder collapses both to the same output, but callers that want to
//! report the difference can.
//!
//! Checking that the path exists and is a regular file is the caller's job
//! (see the CLI). This module surfaces open failures and footer parse
//! failures as-is.

mod error;

use std::fs::File;
use std::path::Path;

use bytes::Bytes;
use parquet::file::reader::{ChunkReader, FileReader, SerializedFileReader};
use snafu::ResultExt;

pub use error::{FooterError, FooterResult};

use crate::metadata::RawMetadataMap;
use error::{CorruptFooterSnafu, OpenFileSnafu};

fn metadata_from_chunk_reader<R: ChunkReader + 'static>(
    path: &str,
    source: R,
) -> FooterResult<Option<RawMetadataMap>> {
    let reader = SerializedFileReader::new(source).context(CorruptFooterSnafu { path })?;

    let file_meta = reader.metadata().file_metadata();
    let raw = file_meta
        .key_value_metadata()
        .map(|kvs| RawMetadataMap::from_parquet(kvs));

    match &raw {
        Some(map) => {
            tracing::debug!(path, entries = map.len(), "read footer key-value metadata");
        }
        None => tracing::debug!(path, "footer carries no key-value metadata"),
    }

    Ok(raw)
}

/// Read the raw key-value metadata from the footer of the Parquet file at `path`.
///
/// The file handle is owned by the Parquet reader and released when this
/// function returns, on success or failure.
///
/// Errors:
/// - [`FooterError::OpenFile`] if the file cannot be opened.
/// - [`FooterError::CorruptFooter`] if the footer cannot be parsed.
pub fn read_footer_metadata(path: &Path) -> FooterResult<Option<RawMetadataMap>> {
    let path_str = path.display().to_string();

    let file = File::open(path).context(OpenFileSnafu {
        path: path_str.clone(),
    })?;

    metadata_from_chunk_reader(&path_str, file)
}

/// Read the raw key-value metadata from an in-memory Parquet file.
///
/// `label` is only used for error context (typically the source path).
pub fn read_footer_metadata_from_bytes(
    label: &str,
    data: Bytes,
) -> FooterResult<Option<RawMetadataMap>> {
    metadata_from_chunk_reader(label, data)
}
