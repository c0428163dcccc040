//! Current weather service
//!
//! Resolves coordinates, fetches the forecast and characterizes the first
//! period. Any upstream failure discards the whole request.

use std::{fmt, sync::Arc};

use domain::{Coordinates, Period};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::ForecastPort};

/// Service producing the current forecast period for a location
pub struct CurrentWeatherService {
    forecast: Arc<dyn ForecastPort>,
}

impl fmt::Debug for CurrentWeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrentWeatherService")
            .field("forecast", &"<ForecastPort>")
            .finish()
    }
}

impl CurrentWeatherService {
    /// Create a new service backed by the given forecast port
    pub fn new(forecast: Arc<dyn ForecastPort>) -> Self {
        Self { forecast }
    }

    /// Get the first forecast period for the coordinates, characterized
    #[instrument(skip(self), fields(coordinates = %coordinates))]
    pub async fn current_period(
        &self,
        coordinates: &Coordinates,
    ) -> Result<Period, ApplicationError> {
        let location = self
            .forecast
            .resolve_location(coordinates)
            .await
            .inspect_err(|e| warn!(error = %e, "Failed to resolve location"))?;

        debug!(forecast_url = %location.forecast_url, "Resolved location");

        let periods = self
            .forecast
            .fetch_forecast(&location)
            .await
            .inspect_err(|e| warn!(error = %e, "Failed to fetch forecast"))?;

        let Some(mut period) = periods.into_iter().next() else {
            warn!(forecast_url = %location.forecast_url, "Forecast contained no periods");
            return Err(ApplicationError::EmptyForecast);
        };

        let label = period.characterize();
        debug!(
            period = %period.name,
            temperature = period.temperature,
            characterization = %label,
            "Characterized forecast period"
        );

        Ok(period)
    }
}
