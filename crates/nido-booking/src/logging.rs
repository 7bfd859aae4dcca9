//! Tracing subscriber setup for the Nido binaries.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages
//! - `RUST_LOG=nido=trace` - Show trace for nido crates only
//! - Default: `logging.filter` from config (`info,nido=debug,sqlx=warn`)

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingSettings};
use crate::error::{BookingError, BookingResult};

/// Builds the event filter. `RUST_LOG` wins over the configured directives.
pub fn build_filter(settings: &LoggingSettings) -> BookingResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.filter).map_err(|e| {
            BookingError::InvalidConfig(format!("Invalid log filter '{}': {}", settings.filter, e))
        }),
    }
}

/// A compact stderr subscriber built from the default settings.
///
/// Scoped with `tracing::subscriber::with_default` around config loading, so
/// events emitted before the configured subscriber exists still reach stderr.
pub fn bootstrap_subscriber() -> BookingResult<impl tracing::Subscriber + Send + Sync> {
    let filter = build_filter(&LoggingSettings::default())?;
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .finish())
}

/// Installs the global subscriber. Call once, at the start of `main`.
///
/// Logs go to stderr so stdout stays clean for JSON output.
pub fn init_tracing(settings: &LoggingSettings) -> BookingResult<()> {
    let filter = build_filter(settings)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match settings.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| BookingError::InvalidConfig(format!("Tracing already initialized: {}", e)))
}
