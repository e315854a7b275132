//! Configuration loading for the keygen worker.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated worker configuration.
///
/// The worker is parameterised by its command line, not its environment; the
/// environment only tunes diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Tracing log level for stderr diagnostics.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot be deserialised.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build keygen-worker configuration")?;

        cfg.try_deserialize()
            .context("failed to deserialise keygen-worker configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn from_env_succeeds_without_any_variables_set() {
        let cfg = Config::from_env().unwrap();
        assert!(!cfg.log_level.is_empty());
    }
}
