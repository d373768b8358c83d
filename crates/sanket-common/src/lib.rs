//! sanket-common — Shared types, errors, and reference data used across all Sanket crates.

pub mod error;
pub mod fallback;
pub mod types;

pub use error::{Result, SanketError};
pub use types::{AlertSummary, DataStatus, MigrationFlow, Notification, NotificationKind, Severity, StressZone};
