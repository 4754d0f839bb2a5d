// Pipeline topology domain model
use super::station::GeoPosition;
use serde::{Deserialize, Serialize};

/// Adjacency between two stations, drawn as a polyline on the map.
/// Loaded from static configuration and never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConnection {
    pub from: String,
    pub to: String,
}

/// A connection resolved to endpoint coordinates for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionLine {
    pub from: String,
    pub to: String,
    pub from_position: GeoPosition,
    pub to_position: GeoPosition,
}
