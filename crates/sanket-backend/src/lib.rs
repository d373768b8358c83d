//! sanket-backend — HTTP client for the Sanket analytics backend.
//!
//! Endpoints consumed:
//!   GET  /api/upload/status      — ingestion-pipeline readiness flags
//!   GET  /api/alerts/current     — active alert counters
//!   POST /api/ai/chat            — assistant Q&A
//!   POST /api/ai/explain/issue   — root-cause analysis for one alert

pub mod api;
pub mod client;

pub use api::{AlertsApi, InsightApi, StatusApi};
pub use client::{BackendClient, OFFLINE_REPLY};
