//! Server assembly and lifecycle
//!
//! [`build_app`] wraps the router in the middleware stack; [`serve`] runs it
//! until a [`CancellationToken`] fires, then drains in-flight requests for a
//! bounded time.

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, header},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{
    limit::RequestBodyLimitLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    error::APPLICATION_JSON, middleware::RequestIdLayer, routes::create_router, state::AppState,
};

/// Largest accepted request body; a coordinate pair needs far less
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Build the application with all middleware applied
///
/// Layer order, outermost first: request id, tracing, content type, body limit.
pub fn build_app(state: AppState) -> Router {
    create_router(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_JSON),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new())
}

/// Serve `app` on `listener` until `shutdown` is cancelled
///
/// After cancellation no new connections are accepted. In-flight requests get
/// up to `drain_timeout` to finish before the server stops waiting for them.
///
/// # Errors
///
/// Returns an error if accepting connections fails.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: CancellationToken,
    drain_timeout: Duration,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(addr = %addr, "Server listening");
    }

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.clone().cancelled_owned())
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        () = shutdown.cancelled() => {
            info!(timeout = ?drain_timeout, "Shutdown requested, draining connections");
        }
    }

    if let Ok(result) = tokio::time::timeout(drain_timeout, server).await {
        result?;
        info!("Server shutdown complete");
    } else {
        warn!(timeout = ?drain_timeout, "Drain timeout elapsed, abandoning open connections");
    }

    Ok(())
}
