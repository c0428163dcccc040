//! Current weather HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::CurrentWeatherService;
use infrastructure::{AppConfig, WeatherGovAdapter, init_logging};
use presentation_http::{AppState, build_app, serve};
use tokio::{net::TcpListener, signal};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Log filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str =
    "currentweather_server=info,presentation_http=info,integration_weather=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config is read before logging so the log format can be applied;
    // a load failure is reported once the subscriber is up.
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(config.server.log_format, DEFAULT_LOG_FILTER)?;

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        weather_base_url = %config.weather.base_url,
        "Starting current weather server"
    );

    let adapter = WeatherGovAdapter::with_config(config.weather)?;
    let service = CurrentWeatherService::new(Arc::new(adapter));
    let app = build_app(AppState::new(service));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_signal(shutdown.clone()));

    let drain_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    serve(listener, app, shutdown, drain_timeout).await?;

    Ok(())
}

/// Cancel `token` on the first SIGINT or SIGTERM
async fn cancel_on_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }

    token.cancel();
}
