//! Core data model: backend status flags, alert counters, notifications,
//! and the migration reference records consumed by the metric views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ingestion-pipeline status as reported by `GET /api/upload/status`.
///
/// The backend has drifted between `pipeline_complete` and
/// `ready_for_pipeline` over time; either flag counts as ready. Missing
/// fields deserialize as `false` so a partial payload never locks the UI
/// by accident.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStatus {
    #[serde(default)]
    pub pipeline_complete: bool,
    #[serde(default)]
    pub ready_for_pipeline: bool,
    #[serde(default)]
    pub new_data_detected: bool,
}

impl DataStatus {
    /// Either completion flag suffices.
    pub fn is_ready(&self) -> bool {
        self.pipeline_complete || self.ready_for_pipeline
    }
}

/// Counters extracted from `GET /api/alerts/current`, used to fill the
/// notification templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertSummary {
    /// MVI of the worst critical district, if the scanner reported any.
    pub critical_mvi: Option<f64>,
    /// Number of districts currently classified as high-stress.
    pub high_stress_count: u64,
    /// Total alerts the scanner is tracking (informational).
    pub total_alerts: Option<u64>,
    /// Scanner liveness string, e.g. "active" (informational).
    pub scanner_status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Critical,
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// One operator-facing alert entry in the notification bell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Stable template id; survives refreshes so read/delete target the
    /// same logical entry.
    pub id: u32,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub unread: bool,
    pub kind: NotificationKind,
    pub severity: Severity,
}

/// A source→destination migration corridor with its reported volume and
/// growth string (e.g. `"+12%"`). Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationFlow {
    pub source: String,
    pub target: String,
    pub value: u64,
    pub growth: String,
}

impl MigrationFlow {
    pub fn new(source: &str, target: &str, value: u64, growth: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            value,
            growth: growth.to_string(),
        }
    }
}

/// A named region with a computed migration-pressure rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressZone {
    pub district: String,
    pub state: String,
    /// Migration Velocity Index reported for the zone.
    pub mvi: f64,
    pub severity: Severity,
}

impl StressZone {
    pub fn new(district: &str, state: &str, mvi: f64, severity: Severity) -> Self {
        Self {
            district: district.to_string(),
            state: state.to_string(),
            mvi,
            severity,
        }
    }
}
