//! Structured logging with environment variable configuration.
//!
//! Diagnostics go to stderr so they never mix with compiler output.

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::CompilerConfig;

fn filter_from_config(config: &CompilerConfig) -> EnvFilter {
    EnvFilter::default().add_directive(LevelFilter::from(config.log_level).into())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `TMC_LOG_LEVEL`
/// 3. Default configuration value
///
/// If a global subscriber is already set the call is a no-op, so tests and
/// repeated initialisation keep the first subscriber.
pub fn init_logging(config: &CompilerConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
