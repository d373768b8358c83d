//! Periodic notification refresh with the same lifecycle contract as the
//! readiness poller: immediate first fetch, fixed interval, epoch-guarded
//! teardown. Unlike the gate, a failed fetch does substitute content — the
//! hard-coded fallback entry — so the bell is never silently empty.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sanket_backend::AlertsApi;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::center::SharedCenter;

pub struct AlertsPoller {
    api: Arc<dyn AlertsApi>,
    center: SharedCenter,
    interval: Duration,
    epoch: Arc<AtomicU64>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl AlertsPoller {
    pub fn new(api: Arc<dyn AlertsApi>, center: SharedCenter, interval: Duration) -> Self {
        Self {
            api,
            center,
            interval,
            epoch: Arc::new(AtomicU64::new(0)),
            task: Mutex::new(None),
        }
    }

    /// Begin refreshing. Idempotent while a task is live.
    pub fn start(&self) {
        let mut slot = self.task.lock().unwrap();
        if slot.as_ref().is_some_and(|t| !t.is_finished()) {
            return;
        }

        let api = Arc::clone(&self.api);
        let center = Arc::clone(&self.center);
        let epoch = Arc::clone(&self.epoch);
        let my_epoch = epoch.load(Ordering::SeqCst);
        let interval = self.interval;

        *slot = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let result = api.current_alerts().await;
                if epoch.load(Ordering::SeqCst) != my_epoch {
                    break;
                }
                match result {
                    Ok(summary) => center.refresh_from(&summary),
                    Err(e) => {
                        warn!(error = %e, "alerts fetch failed; substituting fallback entry");
                        center.refresh_fallback();
                    }
                }
            }
        }));
    }

    /// Stop refreshing and invalidate any in-flight response.
    pub fn stop(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        if let Some(task) = self.task.lock().unwrap().take() {
            task.abort();
        }
    }
}

impl Drop for AlertsPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sanket_common::{AlertSummary, NotificationKind, Result, SanketError};
    use std::sync::atomic::AtomicUsize;

    use crate::center::NotificationCenter;

    struct FlakyApi {
        calls: AtomicUsize,
        fail_after: usize,
    }

    #[async_trait]
    impl AlertsApi for FlakyApi {
        async fn current_alerts(&self) -> Result<AlertSummary> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call >= self.fail_after {
                Err(SanketError::Config("connection refused".to_string()))
            } else {
                Ok(AlertSummary {
                    critical_mvi: Some(31.4),
                    high_stress_count: 4,
                    total_alerts: None,
                    scanner_status: None,
                })
            }
        }
    }

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_fetch_fills_templates() {
        let api = Arc::new(FlakyApi { calls: AtomicUsize::new(0), fail_after: usize::MAX });
        let center = Arc::new(NotificationCenter::new());
        let poller = AlertsPoller::new(api, Arc::clone(&center), Duration::from_secs(300));

        poller.start();
        settle().await;

        assert_eq!(center.all().len(), 5);
        assert!(center.all()[0].message.contains("31.4"));
        poller.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_substitutes_fallback() {
        let api = Arc::new(FlakyApi { calls: AtomicUsize::new(0), fail_after: 0 });
        let center = Arc::new(NotificationCenter::new());
        let poller = AlertsPoller::new(api, Arc::clone(&center), Duration::from_secs(300));

        poller.start();
        settle().await;

        let items = center.all();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, NotificationKind::Critical);
        poller.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_cycle_then_degrade() {
        let api = Arc::new(FlakyApi { calls: AtomicUsize::new(0), fail_after: 1 });
        let center = Arc::new(NotificationCenter::new());
        let poller = AlertsPoller::new(api, Arc::clone(&center), Duration::from_secs(300));

        poller.start();
        settle().await;
        assert_eq!(center.all().len(), 5);

        tokio::time::advance(Duration::from_secs(300)).await;
        settle().await;
        assert_eq!(center.all().len(), 1, "second cycle failed and degraded to fallback");
        poller.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_refreshing() {
        let api = Arc::new(FlakyApi { calls: AtomicUsize::new(0), fail_after: usize::MAX });
        let center = Arc::new(NotificationCenter::new());
        let poller = AlertsPoller::new(
            Arc::clone(&api) as Arc<dyn AlertsApi>,
            Arc::clone(&center),
            Duration::from_secs(300),
        );

        poller.start();
        settle().await;
        poller.stop();

        let before = api.calls.load(Ordering::SeqCst);
        tokio::time::advance(Duration::from_secs(1800)).await;
        settle().await;
        assert_eq!(api.calls.load(Ordering::SeqCst), before);
    }
}
