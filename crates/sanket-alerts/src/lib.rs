//! sanket-alerts — Operator notification aggregation.
//!
//! Maps live alert counters onto a fixed template of notification entries
//! for the header bell: the set and order of notification types is fixed
//! at compile time, only the numeric fields come from the backend.

pub mod center;
pub mod poller;

pub use center::{NotificationCenter, SharedCenter, POPOVER_LIMIT};
pub use poller::AlertsPoller;
