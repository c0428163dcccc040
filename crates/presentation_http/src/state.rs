//! Application state shared across handlers

use std::sync::Arc;

use application::CurrentWeatherService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service producing the characterized current forecast period
    pub current_weather: Arc<CurrentWeatherService>,
}

impl AppState {
    /// Create state around the given service
    pub fn new(current_weather: CurrentWeatherService) -> Self {
        Self {
            current_weather: Arc::new(current_weather),
        }
    }
}
