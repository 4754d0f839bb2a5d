use crate::application::telemetry_source::NetworkSnapshot;
use crate::domain::alert::Alert;
use crate::domain::station::{AlertState, CompressorStatus, GeoPosition, Station};
use crate::domain::topology::PipelineConnection;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct NetworkConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub stations: Vec<StationSeed>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub connections: Vec<PipelineConnection>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

/// Station record as supplied by the seed file. The alert workflow state
/// is not configured directly: a seeded suggested pressure means the
/// station starts alerting, and the registry cross-checks that against
/// the `[[alerts]]` entries.
#[derive(Debug, Deserialize, Clone)]
pub struct StationSeed {
    pub name: String,
    pub position: GeoPosition,
    pub current_pressure: f64,
    pub suggested_pressure: Option<f64>,
    pub flow_rate: f64,
    pub temperature: f64,
    pub oxygen_level: f64,
    #[serde(default)]
    pub status: CompressorStatus,
}

impl StationSeed {
    fn into_station(self) -> Station {
        let alert_state = if self.suggested_pressure.is_some() {
            AlertState::Alerting
        } else {
            AlertState::Normal
        };
        Station {
            name: self.name,
            position: self.position,
            current_pressure: self.current_pressure,
            suggested_pressure: self.suggested_pressure,
            flow_rate: self.flow_rate,
            temperature: self.temperature,
            oxygen_level: self.oxygen_level,
            status: self.status,
            alert_state,
        }
    }
}

impl NetworkConfig {
    pub fn into_snapshot(self) -> NetworkSnapshot {
        NetworkSnapshot {
            stations: self.stations.into_iter().map(StationSeed::into_station).collect(),
            alerts: self.alerts,
            connections: self.connections,
        }
    }
}

pub fn load_network_config() -> anyhow::Result<NetworkConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/network"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::{AlarmCategory, Severity};

    const SAMPLE: &str = r#"
        [server]
        listen = "127.0.0.1:9090"

        [[stations]]
        name = "Murakami"
        position = { lat = 35.7254, lon = 140.3087 }
        current_pressure = 8.62
        suggested_pressure = 6.55
        flow_rate = 689
        temperature = 8.44
        oxygen_level = 0.0

        [[stations]]
        name = "Togane"
        position = { lat = 35.5601, lon = 140.3663 }
        current_pressure = 6.55
        flow_rate = 1193
        temperature = 8.63
        oxygen_level = 0.0
        status = { power = 1, alerts = 0, down = 0 }

        [[alerts]]
        station = "Murakami"
        severity = "high"
        category = "Gas Quality"
        message = "Oxygen content above limit at compressor Murakami"
        timestamp = "10:45:23"

        [[connections]]
        from = "Murakami"
        to = "Togane"
    "#;

    fn parse(toml: &str) -> NetworkConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_parse_network_seed() {
        let cfg = parse(SAMPLE);
        assert_eq!(cfg.server.listen, "127.0.0.1:9090");
        assert_eq!(cfg.stations.len(), 2);
        assert_eq!(cfg.alerts.len(), 1);
        assert_eq!(cfg.alerts[0].severity, Severity::High);
        assert_eq!(cfg.alerts[0].category, AlarmCategory::GasQuality);
        assert_eq!(cfg.connections.len(), 1);
    }

    #[test]
    fn test_suggested_pressure_marks_station_alerting() {
        let snapshot = parse(SAMPLE).into_snapshot();
        assert_eq!(snapshot.stations[0].alert_state, AlertState::Alerting);
        assert_eq!(snapshot.stations[0].suggested_pressure, Some(6.55));
        assert_eq!(snapshot.stations[1].alert_state, AlertState::Normal);
        assert_eq!(snapshot.stations[0].status, CompressorStatus::default());
    }

    #[test]
    fn test_listen_defaults_when_server_block_missing() {
        let cfg = parse("stations = []");
        assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    }
}
