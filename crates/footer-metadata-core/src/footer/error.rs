use parquet::errors::ParquetError;
use snafu::{Backtrace, prelude::*};

/// Errors raised while reading key-value metadata from a file footer.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FooterError {
    /// The file exists but could not be opened for reading.
    #[snafu(display("Failed to open {path}: {source}"))]
    OpenFile {
        /// The path that could not be opened.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
        /// The backtrace at the time the error occurred.
        backtrace: Backtrace,
    },

    /// The Parquet reader could not parse the footer structure.
    #[snafu(display("Corrupt or unreadable Parquet footer in {path}: {source}"))]
    CorruptFooter {
        /// The file (or buffer label) whose footer failed to parse.
        path: String,
        /// Underlying parquet error, kept unmodified.
        source: ParquetError,
        /// Diagnostic backtrace for this error.
        backtrace: Backtrace,
    },
}

/// Convenience alias for footer reads.
pub type FooterResult<T> = Result<T, FooterError>;
