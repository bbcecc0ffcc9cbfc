use std::path::Path;

use crate::error::{CliResult, InputMissingSnafu};

/// Ensure `input` names an existing regular file (symlinks are followed).
///
/// Runs before anything tries to open the file, so a bad path never reaches
/// the Parquet reader.
pub fn ensure_input_file(input: &Path) -> CliResult<()> {
    match std::fs::metadata(input) {
        Ok(meta) if meta.is_file() => Ok(()),
        _ => InputMissingSnafu {
            path: input.display().to_string(),
        }
        .fail(),
    }
}
