use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::error::{CliResult, InitLoggingSnafu};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug` and the
/// default is `warn`. Stdout stays reserved for the JSON document.
pub fn init_logging(verbose: bool) -> CliResult<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| {
            InitLoggingSnafu {
                message: e.to_string(),
            }
            .build()
        })
}
