//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - The forecast adapter driving the current weather service end to end
//! - Configuration feeding the adapter

use std::sync::Arc;

use application::{ApplicationError, CurrentWeatherService};
use domain::Coordinates;
use infrastructure::{AppConfig, WeatherGovAdapter};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORECAST_PATH: &str = "/gridpoints/LWX/97,71/forecast";

fn service_for(server: &MockServer) -> CurrentWeatherService {
    let mut config = AppConfig::default();
    config.weather.base_url = server.uri();
    config.weather.timeout_secs = 5;
    config.weather.user_agent = "currentweather-tests".to_string();
    assert!(config.validate().is_ok());

    let adapter = WeatherGovAdapter::with_config(config.weather).unwrap();
    CurrentWeatherService::new(Arc::new(adapter))
}

async fn mount_points(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/points/38.8894,-77.0352"))
        .and(header("user-agent", "currentweather-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "properties": {"forecast": format!("{}{FORECAST_PATH}", server.uri())}
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn service_returns_characterized_first_period() {
    let server = MockServer::start().await;
    mount_points(&server).await;
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "properties": {"periods": [
                {"name": "Today", "temperature": 97, "temperatureUnit": "F",
                 "windSpeed": "5 mph", "windDirection": "SW",
                 "shortForecast": "Hot", "detailedForecast": "Hot and humid."},
                {"name": "Tonight", "temperature": 78, "temperatureUnit": "F"}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let period = service
        .current_period(&Coordinates::new(38.8894, -77.0352))
        .await
        .unwrap();

    assert_eq!(period.name, "Today");
    assert_eq!(period.characterization, "hot");
    assert_eq!(period.wind_direction, "SW");
}

#[tokio::test]
async fn service_reports_empty_forecast() {
    let server = MockServer::start().await;
    mount_points(&server).await;
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"properties": {"periods": []}})),
        )
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .current_period(&Coordinates::new(38.8894, -77.0352))
        .await;

    assert!(matches!(result, Err(ApplicationError::EmptyForecast)));
}

#[tokio::test]
async fn failed_points_lookup_skips_forecast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/points/38.8894,-77.0352"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .current_period(&Coordinates::new(38.8894, -77.0352))
        .await;

    let err = result.unwrap_err();
    assert!(err.is_dependency_failure(), "unexpected error: {err:?}");
}
