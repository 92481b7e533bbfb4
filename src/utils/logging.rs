//! # Logging
//!
//! Installs a `tracing-subscriber` formatter for binaries and tests that embed
//! the codec. The library itself only emits events through `tracing`.

use crate::config::LoggingConfig;
use crate::error::{constants, ProtocolError, Result};

/// Install the global subscriber described by `config`.
///
/// Fails with [`ProtocolError::ConfigError`] if a global subscriber is already
/// set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(true);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| ProtocolError::ConfigError(format!("{}: {e}", constants::ERR_LOGGING_INIT)))?;
    tracing::debug!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}
