//! Logging initialization
//!
//! Installs a `tracing` subscriber writing to stdout, either as
//! human-readable lines or as one JSON object per event.

mod logging;

pub use logging::{TelemetryError, init_logging};
