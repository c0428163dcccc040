//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP listener and logging settings
//!
//! Upstream weather settings reuse the integration crate's config type.
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml` in the working directory, then `CURRENTWEATHER_*`
//! environment variables with `__` between nested keys
//! (e.g. `CURRENTWEATHER_SERVER__PORT=9090`).

mod server;

use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

pub use integration_weather::WeatherGovConfig as WeatherConfig;
pub use server::ServerConfig;

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "CURRENTWEATHER";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// api.weather.gov configuration
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration from the given file stem and environment
    ///
    /// The file is optional; its format is inferred from the extension.
    pub fn load_from(file: &Path) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate settings that serde cannot express
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let base_url = &self.weather.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(config::ConfigError::Message(format!(
                "weather.base_url must be an http(s) URL, got '{base_url}'"
            )));
        }

        if self.weather.timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "weather.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.weather.user_agent.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "weather.user_agent must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
