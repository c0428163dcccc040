//! Current weather handler
//!
//! `POST /currentweather` takes `{"latitude": .., "longitude": ..}` and answers
//! with the first forecast period for that point, characterized as hot, cold
//! or moderate.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use domain::{Coordinates, Period};
use tracing::{error, info, instrument};

use crate::{
    error::{APPLICATION_JSON, ApiError},
    middleware::JsonBody,
    state::AppState,
};

/// Encode a period as the response body
fn encode_period(period: &Period) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(period).map_err(|e| {
        error!(error = %e, "Failed to encode forecast period");
        ApiError::Internal(e.to_string())
    })
}

/// Look up the current forecast period for a coordinate pair
#[instrument(skip_all)]
pub async fn current_weather(
    State(state): State<AppState>,
    JsonBody(coordinates): JsonBody<Coordinates>,
) -> Result<Response, ApiError> {
    let period = state.current_weather.current_period(&coordinates).await?;
    let body = encode_period(&period)?;

    info!(
        coordinates = %coordinates,
        period = %period.name,
        characterization = %period.characterization,
        "Served current weather"
    );

    Ok(([(header::CONTENT_TYPE, APPLICATION_JSON)], body).into_response())
}
