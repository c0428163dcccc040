//! HTTP server configuration.

use serde::{Deserialize, Serialize};

use super::LogFormat;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Upper bound on draining in-flight requests after a shutdown signal
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

const fn default_shutdown_timeout() -> u64 {
    30
}

impl ServerConfig {
    /// `host:port` string for binding the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_format: LogFormat::default(),
            shutdown_timeout_secs: default_shutdown_timeout(),
        }
    }
}
