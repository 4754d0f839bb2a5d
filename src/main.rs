// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::application::station_registry::StationRegistry;
use crate::application::summary_service::SummaryService;
use crate::infrastructure::config::load_network_config;
use crate::infrastructure::static_source::StaticNetworkSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    adjust_pressure, alarm_summary, compressor_tally, get_station, health_check, list_alerts,
    list_stations, topology,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load the network seed configuration
    let network_config = load_network_config()?;
    let listen = network_config.server.listen.clone();

    // Seed the registry from the static source (infrastructure layer)
    let source = Arc::new(StaticNetworkSource::new(network_config));
    let registry = Arc::new(StationRegistry::from_source(source).await?);

    // Create services (application layer)
    let summary_service = SummaryService::new(registry.clone());

    // Create application state
    let state = Arc::new(AppState {
        registry,
        summary_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/stations", get(list_stations))
        .route("/stations/:name", get(get_station))
        .route("/stations/:name/pressure", post(adjust_pressure))
        .route("/alarms/summary", get(alarm_summary))
        .route("/alerts", get(list_alerts))
        .route("/topology", get(topology))
        .route("/compressors", get(compressor_tally))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = listen.parse()?;
    tracing::info!("starting pipeline-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
