// Telemetry source backed by the static seed configuration
use crate::application::telemetry_source::{NetworkSnapshot, TelemetrySource};
use crate::infrastructure::config::NetworkConfig;
use async_trait::async_trait;

/// Stands in for the live ingestion collaborator: serves the snapshot
/// loaded from `config/network.toml`.
pub struct StaticNetworkSource {
    snapshot: NetworkSnapshot,
}

impl StaticNetworkSource {
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            snapshot: config.into_snapshot(),
        }
    }
}

#[async_trait]
impl TelemetrySource for StaticNetworkSource {
    async fn fetch_network(&self) -> anyhow::Result<NetworkSnapshot> {
        Ok(self.snapshot.clone())
    }
}
