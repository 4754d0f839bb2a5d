// Source trait for collaborator-supplied network data
use crate::domain::alert::Alert;
use crate::domain::station::Station;
use crate::domain::topology::PipelineConnection;
use async_trait::async_trait;

/// Everything the telemetry collaborator hands the core at startup:
/// station records, currently-open alerts, and the fixed topology.
#[derive(Debug, Clone, Default)]
pub struct NetworkSnapshot {
    pub stations: Vec<Station>,
    pub alerts: Vec<Alert>,
    pub connections: Vec<PipelineConnection>,
}

#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Fetch the network snapshot used to seed the registry.
    ///
    /// Live ingestion (new alerts, telemetry refresh) is the collaborator's
    /// side of the lifecycle; the core only implements the resolution half.
    async fn fetch_network(&self) -> anyhow::Result<NetworkSnapshot>;
}
