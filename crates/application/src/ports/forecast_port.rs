//! Forecast service port
//!
//! Defines the two-step interface used to obtain a forecast: resolve a
//! coordinate pair to a forecast location, then fetch that location's periods.

use async_trait::async_trait;
use domain::{Coordinates, Period};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of resolving coordinates against the forecast service
///
/// Only carries what the next step needs and is discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDetails {
    /// URL of the forecast for the resolved location
    pub forecast_url: String,
}

impl LocationDetails {
    /// Create location details from a forecast URL
    pub fn new(forecast_url: impl Into<String>) -> Self {
        Self {
            forecast_url: forecast_url.into(),
        }
    }
}

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Resolve coordinates to the location's forecast endpoint
    async fn resolve_location(
        &self,
        coordinates: &Coordinates,
    ) -> Result<LocationDetails, ApplicationError>;

    /// Fetch the ordered forecast periods for a resolved location
    async fn fetch_forecast(
        &self,
        location: &LocationDetails,
    ) -> Result<Vec<Period>, ApplicationError>;
}
