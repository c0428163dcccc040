//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application's forecast port on top of the api.weather.gov
//! client, and owns configuration loading and log subscriber setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LogFormat, ServerConfig, WeatherConfig};
pub use telemetry::{TelemetryError, init_logging};
