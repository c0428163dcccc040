//! Tracing subscriber setup

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// The fallback filter directive could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// The rejected directive
        filter: String,
        /// Parser message
        reason: String,
    },
}

/// Build the level filter
///
/// `RUST_LOG` wins when set and valid; otherwise `default_filter` is used.
fn build_filter(default_filter: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(default_filter).map_err(|e| TelemetryError::InvalidFilter {
        filter: default_filter.to_string(),
        reason: e.to_string(),
    })
}

/// Initialize the global tracing subscriber
///
/// Can only succeed once per process; later calls return
/// [`TelemetryError::Init`].
///
/// # Example
///
/// ```ignore
/// use infrastructure::{LogFormat, init_logging};
///
/// init_logging(LogFormat::Json, "currentweather_server=debug")?;
/// ```
pub fn init_logging(format: LogFormat, default_filter: &str) -> Result<(), TelemetryError> {
    let env_filter = build_filter(default_filter)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(format = %format, "Logging initialized");
    Ok(())
}
