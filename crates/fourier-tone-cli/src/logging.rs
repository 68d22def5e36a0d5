//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset and no `-v` flag was given.
pub const DEFAULT_FILTER: &str = "warn";

/// Maps the `-v` count to a filter directive. Zero means "use `RUST_LOG`".
pub fn verbosity_filter(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Builds the filter: `-v` wins, then `RUST_LOG`, then [`DEFAULT_FILTER`].
pub fn env_filter(verbose: u8) -> EnvFilter {
    match verbosity_filter(verbose) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Installs the global subscriber. Logs go to stderr so `--json` output on
/// stdout stays machine-readable.
pub fn init(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
