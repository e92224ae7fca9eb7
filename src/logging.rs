//! Logging System
//!
//! Structured logging built on the `tracing` crate. The filter is taken from
//! the `EOS_LOG` environment variable when set, falling back to the given
//! default level.

use crate::error::ConfigError;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "EOS_LOG";

/// Initialize the logging system.
///
/// Filter priority: `EOS_LOG` environment variable, then `default_level`.
/// Fails if a global subscriber is already installed.
pub fn init_logging(default_level: &str) -> Result<(), ConfigError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(std::io::stdout),
        )
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}
