//! Forecast period entity
//!
//! A `Period` is one forecast time window as published by the weather
//! service (e.g. "Tonight"), enriched with a temperature characterization.
//! It is both the upstream wire shape and the response returned to callers,
//! so every external field name is pinned by a struct-level `rename_all`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Above this temperature a period is characterized as hot
const HOT_ABOVE: i64 = 85;

/// Below this temperature a period is characterized as cold
const COLD_BELOW: i64 = 45;

/// Coarse label for a forecast temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureCharacterization {
    /// Strictly above 85
    Hot,
    /// 45 to 85 inclusive
    Moderate,
    /// Strictly below 45
    Cold,
}

impl TemperatureCharacterization {
    /// Classify a temperature.
    ///
    /// The value is assumed to be in Fahrenheit; the period's unit is not
    /// consulted.
    #[must_use]
    pub const fn from_temperature(temperature: i64) -> Self {
        if temperature > HOT_ABOVE {
            Self::Hot
        } else if temperature < COLD_BELOW {
            Self::Cold
        } else {
            Self::Moderate
        }
    }

    /// Label used in the `characterization` response field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Moderate => "moderate",
            Self::Cold => "cold",
        }
    }
}

impl fmt::Display for TemperatureCharacterization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chance of precipitation for a period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecipitationProbability {
    /// WMO unit code, e.g. `wmoUnit:percent`
    #[serde(default)]
    pub unit_code: String,
    /// Percentage; `null` when the service has no estimate
    #[serde(default)]
    pub value: Option<i64>,
}

/// One forecast time window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(default)]
    pub name: String,
    pub temperature: i64,
    #[serde(default)]
    pub temperature_unit: String,
    /// Derived label; empty until [`Period::characterize`] runs
    #[serde(default)]
    pub characterization: String,
    #[serde(default)]
    pub wind_speed: String,
    #[serde(default)]
    pub wind_direction: String,
    #[serde(default)]
    pub short_forecast: String,
    #[serde(default)]
    pub detailed_forecast: String,
    #[serde(default)]
    pub probability_of_precipitation: PrecipitationProbability,
}

impl Period {
    /// Populate `characterization` from the period's temperature
    pub fn characterize(&mut self) -> TemperatureCharacterization {
        let label = TemperatureCharacterization::from_temperature(self.temperature);
        self.characterization = label.as_str().to_string();
        label
    }
}
