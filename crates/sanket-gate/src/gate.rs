//! Readiness state machine and invalidation broadcast.

use std::sync::{Arc, Mutex};

use sanket_common::DataStatus;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::info;

/// What the gate currently knows about the ingestion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    /// No successful poll observed yet.
    Unknown,
    /// Backend explicitly reported no processed data.
    NotReady,
    /// Backend reported at least one completion flag.
    Ready,
}

/// Events pushed to cache owners when derived data must be refetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CacheEvent {
    /// Pipeline crossed NotReady → Ready.
    PipelineCompleted,
    /// Backend flagged fresh raw data behind the current analytics.
    NewDataDetected,
}

/// Decides whether data-dependent views may render, and signals consumers
/// when their cached aggregates went stale.
///
/// Exactly one writer (the status poller) mutates the state; everyone else
/// reads through [`Readiness`] snapshots or the broadcast channel.
pub struct ReadinessGate {
    state: Mutex<Readiness>,
    open_paths: Vec<String>,
    event_tx: broadcast::Sender<CacheEvent>,
}

pub type SharedGate = Arc<ReadinessGate>;

impl ReadinessGate {
    pub fn new(open_paths: Vec<String>) -> Self {
        let (event_tx, _) = broadcast::channel(16);
        Self {
            state: Mutex::new(Readiness::Unknown),
            open_paths,
            event_tx,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CacheEvent> {
        self.event_tx.subscribe()
    }

    pub fn readiness(&self) -> Readiness {
        *self.state.lock().unwrap()
    }

    /// Apply one successful poll result. Fetch failures must not call this;
    /// the last known state stands on a network blip.
    ///
    /// Invalidation is edge-triggered: `PipelineCompleted` fires once per
    /// NotReady → Ready transition, never on repeated Ready polls, and not
    /// on Unknown → Ready (there was no observed "not ready" before).
    pub fn observe(&self, status: &DataStatus) {
        let next = if status.is_ready() { Readiness::Ready } else { Readiness::NotReady };

        let prev = {
            let mut state = self.state.lock().unwrap();
            std::mem::replace(&mut *state, next)
        };

        if prev != next {
            info!(from = ?prev, to = ?next, "pipeline readiness changed");
        }

        if prev == Readiness::NotReady && next == Readiness::Ready {
            self.publish(CacheEvent::PipelineCompleted);
        }
        if status.new_data_detected {
            self.publish(CacheEvent::NewDataDetected);
        }
    }

    fn publish(&self, event: CacheEvent) {
        info!(?event, "invalidating derived-data caches");
        // No receivers is fine; the event is only a refresh hint.
        let _ = self.event_tx.send(event);
    }

    /// Whether `path` must be blocked behind the "ingest data first" screen.
    ///
    /// Allow-listed views (landing, guide, ingestion, live data, settings)
    /// work without processed data and are never locked. Everything else
    /// locks only on an explicit NotReady — Unknown does not lock, since
    /// the gate has observed nothing yet.
    pub fn is_locked(&self, path: &str) -> bool {
        if self.open_paths.iter().any(|p| p == path) {
            return false;
        }
        self.readiness() == Readiness::NotReady
    }
}
