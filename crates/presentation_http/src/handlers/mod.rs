//! HTTP request handlers

pub mod current_weather;
pub mod health;
