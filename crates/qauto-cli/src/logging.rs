//! Diagnostic logging setup
//!
//! Library crates emit `tracing` events; this installs the subscriber that
//! prints them on stderr. `RUST_LOG` wins over the default level.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let layer = fmt::layer()
        .compact()
        .with_target(verbose)
        .with_writer(std::io::stderr);

    if tracing_subscriber::registry().with(filter).with(layer).try_init().is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}
