//! api.weather.gov client
//!
//! HTTP client for the National Weather Service points and forecast endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ForecastResponse, PointsResponse};

/// Media type the NWS API serves forecasts as
const GEO_JSON: &str = "application/geo+json";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    ClientInit(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherGovConfig {
    /// API base URL (default: <https://api.weather.gov>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// `User-Agent` sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("currentweather/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for WeatherGovConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Weather client trait for the two-step forecast lookup
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Look up the grid metadata for a point
    async fn get_points(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PointsResponse, WeatherError>;

    /// Fetch the forecast from a URL returned by [`WeatherClient::get_points`]
    async fn get_forecast(&self, forecast_url: &str) -> Result<ForecastResponse, WeatherError>;
}

/// api.weather.gov HTTP client implementation
#[derive(Debug)]
pub struct WeatherGovClient {
    client: Client,
    config: WeatherGovConfig,
}

impl WeatherGovClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherGovConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WeatherError::ClientInit(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the points URL for a coordinate pair.
    ///
    /// The service accepts at most four decimal places, so both values are
    /// rounded to four places.
    fn build_points_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/points/{:.4},{:.4}",
            self.config.base_url.trim_end_matches('/'),
            latitude,
            longitude
        )
    }

    /// GET a URL and decode its JSON body, checking the status first
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, GEO_JSON)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for WeatherGovClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_points(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PointsResponse, WeatherError> {
        let url = self.build_points_url(latitude, longitude);
        debug!(url = %url, "Resolving point");

        self.get_json(&url).await
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, forecast_url: &str) -> Result<ForecastResponse, WeatherError> {
        debug!("Fetching forecast");

        let forecast: ForecastResponse = self.get_json(forecast_url).await?;

        debug!(
            periods = forecast.properties.periods.len(),
            "Fetched forecast"
        );
        Ok(forecast)
    }
}
