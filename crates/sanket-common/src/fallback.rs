//! Static reference dataset used when the live backend is unreachable.
//!
//! Mirrors the representative corridors and stress zones shipped with the
//! dashboard so charts and tables never render empty. Volumes are
//! enrolment-update counts for the reporting window, not census totals.

use crate::types::{MigrationFlow, Severity, StressZone};

/// Representative inter-state migration corridors, largest first by
/// convention (the views re-derive ordering themselves).
pub fn migration_corridors() -> Vec<MigrationFlow> {
    vec![
        MigrationFlow::new("Bihar", "Delhi", 125_000, "+12%"),
        MigrationFlow::new("Uttar Pradesh", "Maharashtra", 98_000, "+8%"),
        MigrationFlow::new("Bihar", "Punjab", 76_000, "+5%"),
        MigrationFlow::new("Uttar Pradesh", "Delhi", 72_000, "+9%"),
        MigrationFlow::new("Rajasthan", "Gujarat", 64_000, "+6%"),
        MigrationFlow::new("West Bengal", "Karnataka", 58_000, "+11%"),
        MigrationFlow::new("Odisha", "Gujarat", 47_000, "+7%"),
        MigrationFlow::new("Madhya Pradesh", "Maharashtra", 43_000, "+4%"),
        MigrationFlow::new("Jharkhand", "Delhi", 38_000, "+10%"),
        MigrationFlow::new("Assam", "Kerala", 29_000, "+14%"),
        MigrationFlow::new("Tamil Nadu", "Karnataka", 24_000, "-2%"),
        MigrationFlow::new("Kerala", "Tamil Nadu", 18_000, "-3%"),
    ]
}

/// Districts currently under elevated migration pressure.
pub fn stress_zones() -> Vec<StressZone> {
    vec![
        StressZone::new("New Delhi", "Delhi", 42.5, Severity::High),
        StressZone::new("Bengaluru Urban", "Karnataka", 38.1, Severity::High),
        StressZone::new("Surat", "Gujarat", 31.4, Severity::High),
        StressZone::new("Ludhiana", "Punjab", 24.9, Severity::Medium),
        StressZone::new("Pune", "Maharashtra", 22.3, Severity::Medium),
        StressZone::new("Ernakulam", "Kerala", 16.7, Severity::Low),
    ]
}

/// National aggregates for the overview header cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NationalAggregates {
    pub total_enrolments: u64,
    pub districts_analyzed: u32,
    pub states_analyzed: u32,
    pub avg_mvi: f64,
}

pub fn national_aggregates() -> NationalAggregates {
    NationalAggregates {
        total_enrolments: 1_380_000_000,
        districts_analyzed: 742,
        states_analyzed: 28,
        avg_mvi: 17.8,
    }
}
