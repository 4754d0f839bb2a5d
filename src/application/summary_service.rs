// Summary service - Alarm aggregation and compressor status tally
use crate::application::station_registry::StationRegistry;
use crate::domain::alert::{AlarmCategory, Alert, Severity};
use crate::domain::station::Station;
use crate::domain::summary::{AlarmSummary, CategoryRow, CompressorTally, SeverityCounts};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct SummaryService {
    registry: Arc<StationRegistry>,
}

impl SummaryService {
    pub fn new(registry: Arc<StationRegistry>) -> Self {
        Self { registry }
    }

    /// Alarms-summary table over the registry's current open alerts.
    pub async fn alarm_summary(&self) -> AlarmSummary {
        summarize(&self.registry.open_alerts().await)
    }

    /// Status-card counters for every station, registry order.
    pub async fn compressor_tally(&self) -> Vec<CompressorTally> {
        tally(&self.registry.stations().await)
    }
}

/// Build the summary table: a TOTAL row first, then one row per category
/// in the fixed display order. Pure over its input; counts do not depend
/// on alert ordering, and an empty input yields all-zero rows.
pub fn summarize(alerts: &[Alert]) -> AlarmSummary {
    let mut by_category: HashMap<AlarmCategory, SeverityCounts> = HashMap::new();
    for alert in alerts {
        let counts = by_category.entry(alert.category).or_default();
        match alert.severity {
            Severity::High => counts.high += 1,
            Severity::Medium => counts.medium += 1,
            Severity::Low => counts.low += 1,
        }
    }

    let mut total = SeverityCounts::default();
    let mut rows = Vec::with_capacity(AlarmCategory::DISPLAY_ORDER.len() + 1);
    for category in AlarmCategory::DISPLAY_ORDER {
        let counts = by_category.get(&category).copied().unwrap_or_default();
        total.add(counts);
        rows.push(CategoryRow {
            name: category.label().to_string(),
            counts,
        });
    }
    rows.insert(
        0,
        CategoryRow {
            name: "TOTAL".to_string(),
            counts: total,
        },
    );

    AlarmSummary { rows }
}

/// Counters are collaborator-supplied display data, copied verbatim from
/// the station record. No derivation happens here; in particular
/// `status.alerts` is a sub-unit counter, unrelated to the alert workflow.
pub fn tally(stations: &[Station]) -> Vec<CompressorTally> {
    stations
        .iter()
        .map(|s| CompressorTally {
            name: s.name.clone(),
            power: s.status.power,
            alerts: s.status.alerts,
            down: s.status.down,
        })
        .collect()
}
