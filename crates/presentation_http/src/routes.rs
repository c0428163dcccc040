//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/health", get(handlers::health::health_check))
        // Forecast API
        .route(
            "/currentweather",
            post(handlers::current_weather::current_weather),
        )
        .with_state(state)
}
