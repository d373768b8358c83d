//! sanket-gate — Readiness gate for data-dependent dashboard views.
//!
//! Polls the backend's pipeline status, tracks a three-state readiness
//! machine, and broadcasts cache-invalidation events on the edge where
//! data first becomes (or is re-)available.

pub mod gate;
pub mod poller;

pub use gate::{CacheEvent, Readiness, ReadinessGate, SharedGate};
pub use poller::StatusPoller;
