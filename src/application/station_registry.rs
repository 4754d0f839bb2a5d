// Station registry - Authoritative store and the pressure-adjustment workflow
use crate::application::telemetry_source::{NetworkSnapshot, TelemetrySource};
use crate::domain::alert::Alert;
use crate::domain::station::{AlertState, Station};
use crate::domain::topology::ConnectionLine;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Recoverable errors reported back to the operator UI.
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("unknown station: {0}")]
    NotFound(String),
    #[error("invalid pressure {0}: must be a non-negative number")]
    InvalidValue(f64),
}

/// Problems in the seed snapshot; these abort startup.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("duplicate station name: {0}")]
    DuplicateStation(String),
    #[error("alert references unknown station: {0}")]
    AlertWithoutStation(String),
    #[error("connection references unknown station: {0}")]
    ConnectionWithoutStation(String),
    #[error("station {0}: alert state, open alerts, and suggested pressure disagree")]
    StateMismatch(String),
}

struct RegistryState {
    /// Insertion order is the registry order seen by all readers.
    stations: Vec<Station>,
    /// Open alerts, newest first.
    alerts: Vec<Alert>,
}

/// Owns all station records. Readers clone snapshots under the read
/// guard; the single mutation path takes the write guard, so adjustments
/// are serialized across the registry.
pub struct StationRegistry {
    state: RwLock<RegistryState>,
    connections: Vec<ConnectionLine>,
}

impl StationRegistry {
    /// Seed the registry from a telemetry source, validating the snapshot.
    pub async fn from_source(source: Arc<dyn TelemetrySource>) -> anyhow::Result<Self> {
        let snapshot = source.fetch_network().await?;
        Ok(Self::from_snapshot(snapshot)?)
    }

    pub fn from_snapshot(snapshot: NetworkSnapshot) -> Result<Self, SeedError> {
        let NetworkSnapshot {
            stations,
            mut alerts,
            connections,
        } = snapshot;

        let mut names = HashSet::new();
        for station in &stations {
            if !names.insert(station.name.as_str()) {
                return Err(SeedError::DuplicateStation(station.name.clone()));
            }
        }
        for alert in &alerts {
            if !names.contains(alert.station.as_str()) {
                return Err(SeedError::AlertWithoutStation(alert.station.clone()));
            }
        }

        // A station is alerting iff the snapshot carries an alert for it,
        // iff it has a suggested pressure.
        let alerting: HashSet<&str> = alerts.iter().map(|a| a.station.as_str()).collect();
        for station in &stations {
            let is_alerting = station.alert_state == AlertState::Alerting;
            if is_alerting != alerting.contains(station.name.as_str())
                || is_alerting != station.suggested_pressure.is_some()
            {
                return Err(SeedError::StateMismatch(station.name.clone()));
            }
        }

        let connections = connections
            .into_iter()
            .map(|conn| {
                let endpoint = |name: &str| {
                    stations
                        .iter()
                        .find(|s| s.name == name)
                        .map(|s| s.position)
                        .ok_or_else(|| SeedError::ConnectionWithoutStation(name.to_string()))
                };
                Ok(ConnectionLine {
                    from_position: endpoint(&conn.from)?,
                    to_position: endpoint(&conn.to)?,
                    from: conn.from,
                    to: conn.to,
                })
            })
            .collect::<Result<Vec<_>, SeedError>>()?;

        // Newest first, matching the dashboard's alert feed
        alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        info!(
            stations = stations.len(),
            open_alerts = alerts.len(),
            connections = connections.len(),
            "station registry seeded"
        );

        Ok(Self {
            state: RwLock::new(RegistryState { stations, alerts }),
            connections,
        })
    }

    /// All stations in registry (insertion) order.
    pub async fn stations(&self) -> Vec<Station> {
        self.state.read().await.stations.clone()
    }

    pub async fn station(&self, name: &str) -> Result<Station, RegistryError> {
        self.state
            .read()
            .await
            .stations
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Currently-open alerts, newest first.
    pub async fn open_alerts(&self) -> Vec<Alert> {
        self.state.read().await.alerts.clone()
    }

    /// Static topology with endpoint coordinates resolved for rendering.
    pub fn connections(&self) -> &[ConnectionLine] {
        &self.connections
    }

    /// The sole mutation entry point: the operator submits a pressure
    /// adjustment, which resolves the station's open alert.
    ///
    /// Resolving is about the alert, not the value: submitting the current
    /// pressure again still clears the suggestion and marks the station
    /// `Resolved`. Repeat submissions against an already-resolved station
    /// overwrite the pressure but never revive the alert indicator.
    pub async fn apply_pressure_adjustment(
        &self,
        name: &str,
        new_pressure: f64,
    ) -> Result<Station, RegistryError> {
        if !new_pressure.is_finite() || new_pressure < 0.0 {
            warn!(station = name, value = new_pressure, "pressure adjustment rejected");
            return Err(RegistryError::InvalidValue(new_pressure));
        }

        let mut state = self.state.write().await;
        let resolved = {
            let station = state
                .stations
                .iter_mut()
                .find(|s| s.name == name)
                .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
            station.current_pressure = new_pressure;
            station.suggested_pressure = None;
            station.alert_state = AlertState::Resolved;
            station.clone()
        };
        state.alerts.retain(|a| a.station != name);

        debug_assert!(state.stations.iter().all(Station::invariant_holds));
        info!(station = name, pressure = new_pressure, "pressure adjustment applied");
        Ok(resolved)
    }
}
