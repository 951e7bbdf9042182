//! Logging init: stderr only, env-filtered, quiet by default.

use tracing_subscriber::EnvFilter;

/// Initialize tracing output to stderr.
///
/// The filter comes from `RUST_LOG`, falling back to `warn` so diagnostics
/// never mix into the diff output on stdout that scripts consume.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
