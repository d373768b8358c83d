//! sanket-metrics — Read-only summaries over migration reference data.
//!
//! Everything here is a pure function over already-validated in-memory
//! slices: no I/O, no side effects. Aggregates are recomputed by the
//! caller whenever the source data changes; nothing is cached.

pub mod views;

pub use views::{average_growth, group_by_key, percent_share, top_corridor, total_volume};
