//! Current weather HTTP presentation layer
//!
//! This crate provides the HTTP API: `POST /currentweather` and `GET /health`,
//! plus the server lifecycle used by the `currentweather-server` binary.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{JsonBody, RequestId, RequestIdLayer};
pub use routes::create_router;
pub use server::{build_app, serve};
pub use state::AppState;
