//! Forecast adapter - Implements ForecastPort using integration_weather

use application::error::ApplicationError;
use application::ports::{ForecastPort, LocationDetails};
use async_trait::async_trait;
use domain::{Coordinates, Period};
use integration_weather::{WeatherClient, WeatherError, WeatherGovClient, WeatherGovConfig};
use tracing::{debug, instrument};

/// Adapter for api.weather.gov
pub struct WeatherGovAdapter {
    client: WeatherGovClient,
}

impl std::fmt::Debug for WeatherGovAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherGovAdapter")
            .field("client", &"WeatherGovClient")
            .finish()
    }
}

impl WeatherGovAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherGovConfig) -> Result<Self, ApplicationError> {
        let client = WeatherGovClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    ///
    /// Anything that goes wrong talking to the service is a dependency
    /// failure; only a client that cannot be built is our own fault.
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ClientInit(e) => ApplicationError::Internal(e),
            WeatherError::RequestFailed(e)
            | WeatherError::ParseError(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::RateLimitExceeded => {
                ApplicationError::ExternalService("weather service rate limit exceeded".into())
            },
        }
    }
}

#[async_trait]
impl ForecastPort for WeatherGovAdapter {
    #[instrument(skip(self), fields(coordinates = %coordinates))]
    async fn resolve_location(
        &self,
        coordinates: &Coordinates,
    ) -> Result<LocationDetails, ApplicationError> {
        let points = self
            .client
            .get_points(coordinates.latitude(), coordinates.longitude())
            .await
            .map_err(Self::map_error)?;

        debug!(forecast_url = %points.properties.forecast, "Resolved forecast URL");
        Ok(LocationDetails::new(points.properties.forecast))
    }

    #[instrument(skip(self), fields(forecast_url = %location.forecast_url))]
    async fn fetch_forecast(
        &self,
        location: &LocationDetails,
    ) -> Result<Vec<Period>, ApplicationError> {
        let forecast = self
            .client
            .get_forecast(&location.forecast_url)
            .await
            .map_err(Self::map_error)?;

        Ok(forecast.properties.periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    const FORECAST_PATH: &str = "/gridpoints/BOX/71,90/forecast";

    fn adapter_for(server: &MockServer) -> WeatherGovAdapter {
        WeatherGovAdapter::with_config(WeatherGovConfig {
            base_url: server.uri(),
            timeout_secs: 5,
            user_agent: "currentweather-tests".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn adapter_creation() {
        let adapter = WeatherGovAdapter::with_config(WeatherGovConfig::default());
        assert!(adapter.is_ok());
    }

    #[test]
    fn debug_output() {
        let adapter = WeatherGovAdapter::with_config(WeatherGovConfig::default()).unwrap();
        let debug = format!("{adapter:?}");
        assert!(debug.contains("WeatherGovAdapter"));
    }

    #[test]
    fn map_error_upstream_failures_are_external() {
        let errors = [
            WeatherError::RequestFailed("connection refused".into()),
            WeatherError::ParseError("missing field".into()),
            WeatherError::ServiceUnavailable("HTTP 503".into()),
            WeatherError::RateLimitExceeded,
        ];

        for err in errors {
            let mapped = WeatherGovAdapter::map_error(err);
            assert!(
                matches!(mapped, ApplicationError::ExternalService(_)),
                "unexpected mapping: {mapped:?}"
            );
        }
    }

    #[test]
    fn map_error_client_construction_is_internal() {
        let mapped = WeatherGovAdapter::map_error(WeatherError::ClientInit("tls".into()));
        assert!(matches!(mapped, ApplicationError::Internal(_)));
    }

    #[tokio::test]
    async fn resolve_location_returns_forecast_url() {
        let server = MockServer::start().await;
        let forecast_url = format!("{}{FORECAST_PATH}", server.uri());

        Mock::given(method("GET"))
            .and(path("/points/42.3601,-71.0589"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "properties": {"forecast": forecast_url}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        let location = adapter
            .resolve_location(&Coordinates::new(42.3601, -71.0589))
            .await
            .unwrap();

        assert_eq!(location.forecast_url, forecast_url);
    }

    #[tokio::test]
    async fn fetch_forecast_returns_periods() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(FORECAST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "properties": {"periods": [
                    {"name": "Today", "temperature": 40, "temperatureUnit": "F"},
                    {"name": "Tonight", "temperature": 28, "temperatureUnit": "F"}
                ]}
            })))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        let location = LocationDetails::new(format!("{}{FORECAST_PATH}", server.uri()));
        let periods = adapter.fetch_forecast(&location).await.unwrap();

        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].name, "Today");
        assert_eq!(periods[1].temperature, 28);
    }

    #[tokio::test]
    async fn upstream_error_status_is_external_service() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        let result = adapter
            .resolve_location(&Coordinates::new(42.3601, -71.0589))
            .await;

        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }

    #[tokio::test]
    async fn unreachable_forecast_url_is_external_service() {
        let server = MockServer::start().await;
        let adapter = adapter_for(&server);

        let location = LocationDetails::new("http://127.0.0.1:1/gridpoints/X/1,1/forecast");
        let result = adapter.fetch_forecast(&location).await;

        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }
}
