use std::str::Utf8Error;

use snafu::{Backtrace, prelude::*};

/// Errors raised while decoding footer metadata into a structured payload.
///
/// Every variant reflects a static defect in the input file. Decoding is
/// all-or-nothing: no partial map or best-effort document is produced.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DecodeError {
    /// A metadata key is not valid UTF-8.
    #[snafu(display("Metadata key #{index} ({lossy:?}) is not valid UTF-8: {source}"))]
    InvalidKeyEncoding {
        /// Position of the offending pair in footer order.
        index: usize,
        /// Lossy rendering of the key, for diagnostics only.
        lossy: String,
        /// Underlying UTF-8 error.
        source: Utf8Error,
        /// Diagnostic backtrace for this error.
        backtrace: Backtrace,
    },

    /// A metadata value is not valid UTF-8.
    #[snafu(display("Metadata value for key '{key}' is not valid UTF-8: {source}"))]
    InvalidValueEncoding {
        /// Key whose value failed to decode.
        key: String,
        /// Underlying UTF-8 error.
        source: Utf8Error,
        /// Diagnostic backtrace for this error.
        backtrace: Backtrace,
    },

    /// The value stored under the reserved key is not valid JSON.
    #[snafu(display("Metadata under key '{key}' is not valid JSON: {source}"))]
    PayloadParse {
        /// The reserved key that was probed.
        key: String,
        /// Underlying JSON parse error.
        source: serde_json::Error,
        /// Diagnostic backtrace for this error.
        backtrace: Backtrace,
    },

    /// The payload nests arrays or objects deeper than the decoder accepts.
    #[snafu(display(
        "Metadata under key '{key}' nests {depth} levels deep (limit {limit})"
    ))]
    PayloadTooDeep {
        /// The reserved key that was probed.
        key: String,
        /// Deepest nesting level found in the payload text.
        depth: usize,
        /// The nesting limit in force.
        limit: usize,
        /// Diagnostic backtrace for this error.
        backtrace: Backtrace,
    },
}

/// Convenience alias for decoder results.
pub type DecodeResult<T> = Result<T, DecodeError>;
