//! Adapters implementing application ports

mod weather_gov_adapter;

pub use weather_gov_adapter::WeatherGovAdapter;
