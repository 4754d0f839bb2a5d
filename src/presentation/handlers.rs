// HTTP request handlers
use crate::application::station_registry::RegistryError;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(err: RegistryError) -> Response {
    let status = match err {
        RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
        RegistryError::InvalidValue(_) => StatusCode::BAD_REQUEST,
    };
    (status, Json(ErrorBody { error: err.to_string() })).into_response()
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// All stations for map-marker rendering
pub async fn list_stations(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.registry.stations().await)
}

/// One station for the popup detail view
pub async fn get_station(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.registry.station(&name).await {
        Ok(station) => Json(station).into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct PressureAdjustment {
    pub pressure: f64,
}

/// The sole write route: operator-submitted pressure adjustment.
/// Returns the updated record for the confirmation view.
pub async fn adjust_pressure(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<PressureAdjustment>,
) -> Response {
    match state
        .registry
        .apply_pressure_adjustment(&name, body.pressure)
        .await
    {
        Ok(station) => Json(station).into_response(),
        Err(err) => error_response(err),
    }
}

/// Alarms-summary table, TOTAL row first
pub async fn alarm_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.summary_service.alarm_summary().await)
}

/// Open alerts, newest first
pub async fn list_alerts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.registry.open_alerts().await)
}

/// Pipeline polylines with resolved endpoint coordinates
pub async fn topology(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.registry.connections().to_vec())
}

/// Status-card counters per station
pub async fn compressor_tally(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.summary_service.compressor_tally().await)
}
