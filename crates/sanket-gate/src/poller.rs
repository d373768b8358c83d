//! Fixed-interval status polling with explicit lifecycle.
//!
//! The poller owns the only write path into the gate. It fetches once
//! immediately on `start()`, then on every interval tick while running.
//! `stop()` bumps the epoch and aborts the task; a response that resolves
//! under a stale epoch is dropped instead of applied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sanket_backend::StatusApi;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::gate::SharedGate;

pub struct StatusPoller {
    api: Arc<dyn StatusApi>,
    gate: SharedGate,
    interval: Duration,
    epoch: Arc<AtomicU64>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl StatusPoller {
    pub fn new(api: Arc<dyn StatusApi>, gate: SharedGate, interval: Duration) -> Self {
        Self {
            api,
            gate,
            interval,
            epoch: Arc::new(AtomicU64::new(0)),
            task: Mutex::new(None),
        }
    }

    /// Begin polling. Idempotent: a second call while running is a no-op.
    pub fn start(&self) {
        let mut slot = self.task.lock().unwrap();
        if slot.as_ref().is_some_and(|t| !t.is_finished()) {
            return;
        }

        let api = Arc::clone(&self.api);
        let gate = Arc::clone(&self.gate);
        let epoch = Arc::clone(&self.epoch);
        let my_epoch = epoch.load(Ordering::SeqCst);
        let interval = self.interval;

        *slot = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let result = api.data_status().await;
                // A stop() may have raced the request; stale results are
                // dropped rather than applied to a gate nobody watches.
                if epoch.load(Ordering::SeqCst) != my_epoch {
                    break;
                }
                match result {
                    Ok(status) => gate.observe(&status),
                    Err(e) => warn!(error = %e, "status poll failed; keeping last known readiness"),
                }
            }
        }));
    }

    /// Stop polling and invalidate any in-flight response.
    pub fn stop(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        if let Some(task) = self.task.lock().unwrap().take() {
            task.abort();
        }
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
