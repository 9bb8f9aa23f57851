//! Diagnostic logging on stderr.
//!
//! Library crates log through the `log` facade; the subscriber installed here
//! forwards those records and filters them with `RUST_LOG`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::CliError;

const DEFAULT_FILTER: &str = "info";

/// Install the process-wide log subscriber.
///
/// # Errors
/// Returns [`CliError::Logging`] when a subscriber or `log` logger is already
/// installed.
pub fn init_logging() -> Result<(), CliError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
        .map_err(CliError::Logging)
}
