use crate::error::{AppError, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `UNIXIZE_LOG=debug`.
pub const LOG_ENV: &str = "UNIXIZE_LOG";

/// Install a stderr subscriber. Records from the `log` facade used by the
/// engine are forwarded to it.
///
/// # Errors
/// Returns [`AppError::Logging`] if a global subscriber is already set.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
