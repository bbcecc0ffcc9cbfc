//! Dump the JSON metadata a producer stored in a Parquet file footer.

mod error;
mod logging;
mod paths;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use footer_metadata_core::{
    RESERVED_KEY, dump_metadata_with_key, dump_raw_metadata, write_document,
};
use snafu::ResultExt;

use crate::error::{CliResult, DumpMetadataSnafu, WriteOutputSnafu};

#[derive(Debug, Parser)]
#[command(
    name = "dump-metadata",
    about = "Dump the KeyValueMetadata from a Parquet file"
)]
struct Cli {
    /// Path to a Parquet file
    input: PathBuf,

    /// Footer key whose value holds the JSON document
    #[arg(long, env = "DUMP_METADATA_KEY", default_value = RESERVED_KEY)]
    key: String,

    /// Print every footer key-value entry as strings instead of the parsed
    /// document (ignores --key)
    #[arg(long, default_value_t = false)]
    raw: bool,

    /// Log on stderr why no document was found (no map, empty map, key missing)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn run(cli: Cli) -> CliResult<()> {
    logging::init_logging(cli.verbose)?;
    paths::ensure_input_file(&cli.input)?;

    let doc = if cli.raw {
        dump_raw_metadata(&cli.input).context(DumpMetadataSnafu)?
    } else {
        let payload = dump_metadata_with_key(&cli.input, &cli.key).context(DumpMetadataSnafu)?;
        if payload.is_empty_document() {
            tracing::info!(
                key = %cli.key,
                reason = %payload.source,
                "no structured metadata; printing empty document"
            );
        } else {
            tracing::info!(key = %cli.key, "decoded footer metadata");
        }
        payload.document
    };

    write_document(io::stdout().lock(), &doc).context(WriteOutputSnafu)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if e.is_user_input_error() {
            println!("{e}");
        } else {
            eprintln!("{e}");
        }
        std::process::exit(1);
    }
}
