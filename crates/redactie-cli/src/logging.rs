//! Tracing setup
//!
//! Logs go to stderr so rendered output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
