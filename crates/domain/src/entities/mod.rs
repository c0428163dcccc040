//! Domain entities - Forecast data returned to callers

mod period;

pub use period::{Period, PrecipitationProbability, TemperatureCharacterization};
