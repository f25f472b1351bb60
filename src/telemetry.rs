//! Logging initialisation.
//!
//! Library code only emits `tracing` events; hosts call [`init`] once at
//! start-up to install a subscriber. `RUST_LOG` takes precedence over the
//! configured level.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "info";

/// `[logging]` settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `taskzen=debug`.
    pub level: String,
    /// Emit ANSI colours.
    pub ansi: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_owned(),
            ansi: true,
        }
    }
}

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// Directive that failed to parse.
        directive: String,
        /// Parser message.
        reason: String,
    },
    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Builds the filter: `RUST_LOG` when set, the configured level otherwise.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the configured level does
/// not parse.
pub fn filter(settings: &LoggingSettings) -> Result<EnvFilter, TelemetryError> {
    if let Ok(from_env) = EnvFilter::try_from_default_env() {
        return Ok(from_env);
    }
    EnvFilter::try_new(&settings.level).map_err(|err| TelemetryError::InvalidFilter {
        directive: settings.level.clone(),
        reason: err.to_string(),
    })
}

/// Installs a formatting subscriber as the global default.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or another
/// subscriber was installed first.
pub fn init(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let env_filter = filter(settings)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(settings.ansi)
        .try_init()
        .map_err(|err| TelemetryError::AlreadyInstalled(err.to_string()))
}
