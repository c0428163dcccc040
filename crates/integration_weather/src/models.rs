//! api.weather.gov response models
//!
//! Only the fields this service reads are modelled; everything else in the
//! GeoJSON documents is ignored on decode.

use domain::Period;
use serde::{Deserialize, Serialize};

/// Response of `/points/{lat},{lon}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    #[serde(rename = "properties")]
    pub properties: PointsProperties,
}

/// Properties of a points response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsProperties {
    /// URL of the twelve-hour-period forecast for the grid cell
    #[serde(rename = "forecast")]
    pub forecast: String,
}

/// Response of a gridpoint forecast URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(rename = "properties")]
    pub properties: ForecastProperties,
}

/// Properties of a forecast response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastProperties {
    /// Forecast periods in chronological order
    #[serde(rename = "periods")]
    pub periods: Vec<Period>,
}
