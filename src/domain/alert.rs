// Alarm domain model
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Alarm category as assigned by the telemetry collaborator.
///
/// The category is an attribute of the alert record, not derived from
/// station fields; the core only classifies counts by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlarmCategory {
    Pressure,
    Flow,
    #[serde(rename = "Gas Quality")]
    GasQuality,
    Valve,
}

impl AlarmCategory {
    /// Fixed display order used by the alarms-summary table.
    pub const DISPLAY_ORDER: [AlarmCategory; 4] = [
        AlarmCategory::Pressure,
        AlarmCategory::Flow,
        AlarmCategory::GasQuality,
        AlarmCategory::Valve,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AlarmCategory::Pressure => "Pressure",
            AlarmCategory::Flow => "Flow",
            AlarmCategory::GasQuality => "Gas Quality",
            AlarmCategory::Valve => "Valve",
        }
    }
}

/// One open alert, bound to the station it was raised on.
///
/// An alert exists exactly while its station is alerting; resolving the
/// station discards the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub severity: Severity,
    pub category: AlarmCategory,
    pub message: String,
    pub timestamp: NaiveTime,
    pub station: String,
}
