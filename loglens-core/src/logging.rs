use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with environment-based filtering.
///
/// Diagnostics go to stderr so stdout stays clean for rendered output.
/// `RUST_LOG` overrides the default level; `verbose` raises the default
/// from "info" to "debug".
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
