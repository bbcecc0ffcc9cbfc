use footer_metadata_core::MetadataError;

use snafu::Snafu;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CliError {
    #[snafu(display("ERROR: Provided input file (={path}) does not exist"))]
    InputMissing { path: String },

    #[snafu(display("Failed to dump metadata: {source}"))]
    DumpMetadata {
        #[snafu(source(from(MetadataError, Box::new)))]
        source: Box<MetadataError>,
    },

    #[snafu(display("Failed to write metadata to stdout: {source}"))]
    WriteOutput { source: std::io::Error },

    #[snafu(display("Failed to initialise logging: {message}"))]
    InitLogging { message: String },
}

impl CliError {
    /// The missing-input diagnostic is part of normal output (stdout); every
    /// other failure goes to stderr.
    pub fn is_user_input_error(&self) -> bool {
        matches!(self, CliError::InputMissing { .. })
    }
}
