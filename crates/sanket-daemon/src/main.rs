//! Sanket monitor daemon
//!
//! Run with: cargo run -p sanket-daemon
//!
//! Keeps the readiness gate and notification center fresh against the
//! analytics backend and logs every cache-invalidation edge. This is the
//! headless stand-in for a mounted dashboard shell: pollers start when the
//! process comes up and stop on ctrl-c.

use std::sync::Arc;
use std::time::Duration;

use sanket_alerts::{AlertsPoller, NotificationCenter};
use sanket_backend::{BackendClient, InsightApi, OFFLINE_REPLY};
use sanket_config::Config;
use sanket_gate::{ReadinessGate, StatusPoller};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "falling back to default configuration");
            Config::default()
        }
    };

    let client = Arc::new(BackendClient::new(
        &config.backend.base_url,
        Duration::from_secs(config.backend.timeout_secs),
    )?);

    // One-shot assistant query: `sanketd ask "why is Delhi inflow spiking?"`
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 3 && args[1] == "ask" {
        let query = args[2..].join(" ");
        let reply = match client.chat(&query, serde_json::json!({})).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => OFFLINE_REPLY.to_string(),
            Err(e) => {
                warn!(error = %e, "assistant request failed");
                OFFLINE_REPLY.to_string()
            }
        };
        println!("{reply}");
        return Ok(());
    }

    info!(backend = %config.backend.base_url, "starting sanket monitor");

    let gate = Arc::new(ReadinessGate::new(config.gate.open_paths.clone()));
    let center = Arc::new(NotificationCenter::new());

    let status_poller = StatusPoller::new(
        client.clone(),
        Arc::clone(&gate),
        Duration::from_secs(config.polling.status_interval_secs),
    );
    let alerts_poller = AlertsPoller::new(
        client.clone(),
        Arc::clone(&center),
        Duration::from_secs(config.polling.alerts_interval_secs),
    );

    let mut events = gate.subscribe();
    let event_gate = Arc::clone(&gate);
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            info!(
                ?event,
                readiness = ?event_gate.readiness(),
                "derived-data caches invalidated"
            );
        }
    });

    status_poller.start();
    alerts_poller.start();

    tokio::signal::ctrl_c().await?;
    info!("shutting down");

    status_poller.stop();
    alerts_poller.stop();

    info!(
        readiness = ?gate.readiness(),
        unread = center.unread_count(),
        "final state"
    );
    Ok(())
}
