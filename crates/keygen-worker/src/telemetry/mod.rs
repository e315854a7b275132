//! Telemetry initialisation for the keygen worker.
//!
//! Structured JSON logs go to **stderr**, never stdout: the parent process
//! parses stdout as exactly one JSON key-pair document, so the output stream
//! must stay free of diagnostic text.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber for the worker.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise keygen-worker tracing subscriber: {e}"))
}
