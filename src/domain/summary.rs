// Alarms-summary domain model
use serde::Serialize;

/// Alarm counts for one severity triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl SeverityCounts {
    pub fn add(&mut self, other: SeverityCounts) {
        self.high += other.high;
        self.medium += other.medium;
        self.low += other.low;
    }
}

/// One row of the alarms-summary table.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    pub name: String,
    #[serde(flatten)]
    pub counts: SeverityCounts,
}

/// The full summary table: a synthetic TOTAL row first, then one row per
/// category in fixed display order. Recomputed on every read.
#[derive(Debug, Clone, Serialize)]
pub struct AlarmSummary {
    pub rows: Vec<CategoryRow>,
}

impl AlarmSummary {
    pub fn total(&self) -> SeverityCounts {
        // TOTAL is always the first row
        self.rows.first().map(|r| r.counts).unwrap_or_default()
    }
}

/// Status-card entry for one station, counters passed through verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct CompressorTally {
    pub name: String,
    pub power: u32,
    pub alerts: u32,
    pub down: u32,
}
