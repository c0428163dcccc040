//! National Weather Service integration
//!
//! Client for the api.weather.gov REST API (<https://www.weather.gov/documentation/services-web-api>).
//! A forecast is obtained in two steps: `/points/{lat},{lon}` yields the
//! forecast URL for the grid cell covering the point, and that URL yields
//! the forecast periods. No API key is required, but the service rejects
//! requests without a `User-Agent`.

pub mod client;
mod models;

pub use client::{WeatherClient, WeatherError, WeatherGovClient, WeatherGovConfig};
pub use models::{ForecastProperties, ForecastResponse, PointsProperties, PointsResponse};
