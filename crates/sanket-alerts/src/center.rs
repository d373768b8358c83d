//! Notification list, template table, and local read/delete state.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use sanket_common::{AlertSummary, Notification, NotificationKind, Severity};
use tracing::debug;

/// Entries shown in the bell popover before "view all".
pub const POPOVER_LIMIT: usize = 5;

/// Fixed template ids. Stable across refreshes so read/delete state can
/// target the same logical entry.
const ID_CRITICAL_MVI: u32 = 1;
const ID_HIGH_STRESS: u32 = 2;
const ID_FORECAST: u32 = 3;
const ID_PIPELINE: u32 = 4;
const ID_REPORT: u32 = 5;

/// Build the full template list with counters substituted in.
/// Order is fixed: most severe first.
fn fill_templates(summary: &AlertSummary) -> Vec<Notification> {
    let now = Utc::now();
    let mvi = summary.critical_mvi.unwrap_or(0.0);

    vec![
        Notification {
            id: ID_CRITICAL_MVI,
            title: "Critical migration stress".to_string(),
            message: format!("Worst-affected district at MVI {:.1}. Immediate review advised.", mvi),
            timestamp: now,
            unread: true,
            kind: NotificationKind::Critical,
            severity: Severity::High,
        },
        Notification {
            id: ID_HIGH_STRESS,
            title: "High-stress districts".to_string(),
            message: format!(
                "{} districts exceed the high-stress threshold this cycle.",
                summary.high_stress_count
            ),
            timestamp: now,
            unread: true,
            kind: NotificationKind::Warning,
            severity: Severity::High,
        },
        Notification {
            id: ID_FORECAST,
            title: "Forecast advisory".to_string(),
            message: "Projected inflow surge in metro corridors over the next 30 days.".to_string(),
            timestamp: now,
            unread: true,
            kind: NotificationKind::Warning,
            severity: Severity::Medium,
        },
        Notification {
            id: ID_PIPELINE,
            title: "Analytics refreshed".to_string(),
            message: "Latest ingestion cycle has been folded into all dashboards.".to_string(),
            timestamp: now,
            unread: true,
            kind: NotificationKind::Info,
            severity: Severity::Low,
        },
        Notification {
            id: ID_REPORT,
            title: "Weekly digest ready".to_string(),
            message: "The national migration digest is available for export.".to_string(),
            timestamp: now,
            unread: false,
            kind: NotificationKind::Success,
            severity: Severity::Low,
        },
    ]
}

/// Single entry shown when the alerts endpoint is unreachable, so the
/// bell indicator is never silently empty.
fn fallback_entry() -> Notification {
    Notification {
        id: ID_CRITICAL_MVI,
        title: "Alert feed unavailable".to_string(),
        message: "Live alert scanner could not be reached. Showing last-resort advisory; \
                  critical districts may be unreported."
            .to_string(),
        timestamp: Utc::now(),
        unread: true,
        kind: NotificationKind::Critical,
        severity: Severity::High,
    }
}

/// In-memory notification list for the header bell.
///
/// Read/delete mutations are local view state only — they are not sent to
/// the server and are discarded on the next full refresh. Unread and
/// critical counts are always derived by counting, never tracked.
pub struct NotificationCenter {
    items: Mutex<Vec<Notification>>,
}

pub type SharedCenter = Arc<NotificationCenter>;

impl NotificationCenter {
    pub fn new() -> Self {
        Self { items: Mutex::new(Vec::new()) }
    }

    /// Replace the list from a successful alerts fetch.
    pub fn refresh_from(&self, summary: &AlertSummary) {
        let filled = fill_templates(summary);
        debug!(count = filled.len(), "notification templates refreshed");
        *self.items.lock().unwrap() = filled;
    }

    /// Replace the list with the hard-coded fallback entry.
    pub fn refresh_fallback(&self) {
        *self.items.lock().unwrap() = vec![fallback_entry()];
    }

    pub fn all(&self) -> Vec<Notification> {
        self.items.lock().unwrap().clone()
    }

    /// Truncated view for the bell popover.
    pub fn top(&self, n: usize) -> Vec<Notification> {
        let items = self.items.lock().unwrap();
        items.iter().take(n).cloned().collect()
    }

    pub fn unread_count(&self) -> usize {
        self.items.lock().unwrap().iter().filter(|n| n.unread).count()
    }

    pub fn critical_count(&self) -> usize {
        self.items
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.kind == NotificationKind::Critical)
            .count()
    }

    /// Flip one entry to read. Unknown ids are ignored.
    pub fn mark_read(&self, id: u32) {
        if let Some(n) = self.items.lock().unwrap().iter_mut().find(|n| n.id == id) {
            n.unread = false;
        }
    }

    /// Delete one entry from the local list. Unknown ids are ignored.
    pub fn remove(&self, id: u32) {
        self.items.lock().unwrap().retain(|n| n.id != id);
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> AlertSummary {
        AlertSummary {
            critical_mvi: Some(42.5),
            high_stress_count: 7,
            total_alerts: Some(11),
            scanner_status: Some("active".to_string()),
        }
    }

    #[test]
    fn test_template_order_and_substitution() {
        let center = NotificationCenter::new();
        center.refresh_from(&summary());

        let items = center.all();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].kind, NotificationKind::Critical);
        assert!(items[0].message.contains("42.5"));
        assert!(items[1].message.contains("7 districts"));
        let ids: Vec<u32> = items.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_missing_mvi_substitutes_zero() {
        let center = NotificationCenter::new();
        center.refresh_from(&AlertSummary::default());
        assert!(center.all()[0].message.contains("0.0"));
    }

    #[test]
    fn test_unread_count_is_always_derived() {
        let center = NotificationCenter::new();
        center.refresh_from(&summary());

        let expected = center.all().iter().filter(|n| n.unread).count();
        assert_eq!(center.unread_count(), expected);
        assert_eq!(center.unread_count(), 4);

        center.mark_read(1);
        assert_eq!(center.unread_count(), 3);
        let expected = center.all().iter().filter(|n| n.unread).count();
        assert_eq!(center.unread_count(), expected);

        center.remove(2);
        assert_eq!(center.unread_count(), 2);
        assert_eq!(center.all().len(), 4);
    }

    #[test]
    fn test_mark_read_is_idempotent_and_ignores_unknown_ids() {
        let center = NotificationCenter::new();
        center.refresh_from(&summary());
        center.mark_read(1);
        center.mark_read(1);
        center.mark_read(99);
        assert_eq!(center.unread_count(), 3);
    }

    #[test]
    fn test_refresh_discards_local_mutations() {
        let center = NotificationCenter::new();
        center.refresh_from(&summary());
        center.mark_read(1);
        center.remove(5);

        center.refresh_from(&summary());
        assert_eq!(center.all().len(), 5);
        assert_eq!(center.unread_count(), 4);
    }

    #[test]
    fn test_fallback_is_single_critical_entry() {
        let center = NotificationCenter::new();
        center.refresh_fallback();

        let items = center.all();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, NotificationKind::Critical);
        assert_eq!(center.unread_count(), 1);
        assert_eq!(center.critical_count(), 1);
    }

    #[test]
    fn test_popover_truncation() {
        let center = NotificationCenter::new();
        center.refresh_from(&summary());
        assert_eq!(center.top(POPOVER_LIMIT).len(), 5);
        assert_eq!(center.top(3).len(), 3);
        assert_eq!(center.top(3)[0].id, 1);
    }
}
