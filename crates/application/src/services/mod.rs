//! Application services - Use case implementations

mod current_weather_service;

pub use current_weather_service::CurrentWeatherService;
