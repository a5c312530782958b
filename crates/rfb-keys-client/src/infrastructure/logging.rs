//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Builds the log filter: `RUST_LOG` if set and valid, otherwise `fallback`
/// (normally the configured `log_level`), otherwise `info`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber, writing to stderr so that tool output on
/// stdout stays machine-readable.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging(fallback: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
