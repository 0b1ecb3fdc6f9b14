// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::poller::{PollerSettings, TelemetryPoller};
use crate::application::prediction_service::PredictionService;
use crate::infrastructure::config::{load_gateway_config, load_poller_config};
use crate::infrastructure::http_gateway::HttpGatewayClient;
use crate::infrastructure::process_oracle::ProcessOracle;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dashboard, health_check, leak_detail, optimization_chart, predict_leak, predict_optimization,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let gateway_config = load_gateway_config()?;
    let poller_config = load_poller_config()?.poller;

    // Oracles (infrastructure layer)
    let oracle_timeout = Duration::from_millis(gateway_config.limits.oracle_timeout_ms);
    let leak_oracle = Arc::new(ProcessOracle::new(gateway_config.oracles.leak, oracle_timeout));
    let optimization_oracle = Arc::new(ProcessOracle::new(
        gateway_config.oracles.optimization,
        oracle_timeout,
    ));

    // Gateway service (application layer)
    let predictions = PredictionService::new(
        leak_oracle,
        optimization_oracle,
        gateway_config.limits.max_concurrent_oracles,
    );

    // Poller with its HTTP client back into the gateway; the client timeout
    // leaves headroom beyond the oracle bound so the gateway answers first
    let client = Arc::new(HttpGatewayClient::new(
        poller_config.gateway_url,
        oracle_timeout + Duration::from_secs(5),
    )?);
    let (view, poller) = TelemetryPoller::spawn(
        client,
        PollerSettings {
            leak_interval: Duration::from_millis(poller_config.leak_interval_ms),
            optimization_interval: Duration::from_millis(poller_config.optimization_interval_ms),
        },
    );

    // Create application state
    let state = Arc::new(AppState { predictions, view });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/predict/leak", get(predict_leak))
        .route("/predict/optimization", get(predict_optimization))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/leak", get(leak_detail))
        .route("/dashboard/optimization", get(optimization_chart))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = gateway_config.server.bind.parse()?;
    println!("Starting fuel-telemetry service on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    // Stop the polling loops before exiting
    poller.shutdown().await;

    Ok(())
}
