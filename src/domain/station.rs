// Compressor station domain model
use serde::{Deserialize, Serialize};

/// Geographic position of a station, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub lat: f64,
    pub lon: f64,
}

/// Operational sub-unit counters shown on the status cards.
///
/// These are collaborator-supplied display values and are passed through
/// verbatim. `alerts` here counts sub-units, not the station's alert
/// workflow state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressorStatus {
    pub power: u32,
    pub alerts: u32,
    pub down: u32,
}

/// Per-station alert workflow state.
///
/// `Resolved` is sticky: nothing in this core returns a station to
/// `Normal` or `Alerting` once an operator has resolved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertState {
    Normal,
    Alerting,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub position: GeoPosition,
    /// MPa, always present and non-negative.
    pub current_pressure: f64,
    /// Operator-facing recommended value; `Some` exactly while `Alerting`.
    pub suggested_pressure: Option<f64>,
    /// m³/h, informational.
    pub flow_rate: f64,
    /// °C, informational.
    pub temperature: f64,
    /// Percent, informational.
    pub oxygen_level: f64,
    pub status: CompressorStatus,
    pub alert_state: AlertState,
}

impl Station {
    /// The workflow invariant: a suggested pressure exists exactly while
    /// the station is alerting.
    pub fn invariant_holds(&self) -> bool {
        self.suggested_pressure.is_some() == (self.alert_state == AlertState::Alerting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(state: AlertState, suggested: Option<f64>) -> Station {
        Station {
            name: "Togane".to_string(),
            position: GeoPosition { lat: 35.5601, lon: 140.3663 },
            current_pressure: 6.55,
            suggested_pressure: suggested,
            flow_rate: 1193.0,
            temperature: 8.63,
            oxygen_level: 0.0,
            status: CompressorStatus::default(),
            alert_state: state,
        }
    }

    #[test]
    fn test_invariant_requires_suggestion_while_alerting() {
        assert!(station(AlertState::Alerting, Some(6.55)).invariant_holds());
        assert!(!station(AlertState::Alerting, None).invariant_holds());
    }

    #[test]
    fn test_invariant_forbids_suggestion_otherwise() {
        assert!(station(AlertState::Normal, None).invariant_holds());
        assert!(station(AlertState::Resolved, None).invariant_holds());
        assert!(!station(AlertState::Resolved, Some(6.55)).invariant_holds());
    }
}
