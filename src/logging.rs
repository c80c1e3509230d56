// src/logging.rs
// =============================================================================
// Sets up `tracing` output for the binary.
//
// Diagnostics always go to stderr so stdout carries only the table or JSON.
//
// Filter, first match wins:
//   1. REPO_MEDIA_LOG  (e.g. REPO_MEDIA_LOG=repo_media=debug)
//   2. RUST_LOG
//   3. "debug" with --verbose, "warn" otherwise
// =============================================================================

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

const LOG_ENV_VAR: &str = "REPO_MEDIA_LOG";

pub fn init(verbose: bool) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
